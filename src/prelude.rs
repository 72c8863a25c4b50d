/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # CloudPlugs Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! of the library. Importing the prelude brings the session, the service traits, the
//! request models and the error types into scope.
//!
//! ## Usage
//!
//! ```rust
//! use cloudplugs_client::prelude::*;
//!
//! let config = Config::default();
//! let session = Session::from_config(&config).unwrap();
//! assert!(session.auth().is_none());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the CloudPlugs client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error type, error codes and result alias
pub use crate::error::{AppError, CpResult, ErrorCode};

// ============================================================================
// SESSION AND AUTHENTICATION
// ============================================================================

/// Session executing every request
pub use crate::application::client::Session;

/// Authentication state and headers
pub use crate::application::auth::{AuthHeader, PlugAuth, is_email};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Data and channel operations
pub use crate::application::services::DataService;

/// Device operations
pub use crate::application::services::DeviceService;

// ============================================================================
// MODELS
// ============================================================================

/// Request bodies
pub use crate::model::body::Body;

/// Typed requests
pub use crate::model::requests::{
    ControlDeviceRequest, DataFilter, DeviceUpdate, EnrollProductRequest,
    EnrollPrototypeRequest, LocationUpdate, PublishRequest, RemoveDataRequest,
};

/// Responses and status strings
pub use crate::model::responses::{ApiResponse, http_result_string, is_success_status};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Identifier generation
pub use crate::utils::id::get_id;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
