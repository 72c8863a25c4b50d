/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # CloudPlugs Client
//!
//! Client library for the CloudPlugs IoT REST API. It authenticates a device or a
//! master account and exposes the device management (enrollment, properties,
//! location) and time-series data (publish, retrieve, remove) endpoints.
//!
//! Every call returns a [`CpResult`](error::CpResult): either the raw
//! [`ApiResponse`](model::responses::ApiResponse) of a successful exchange (HTTP 200 or
//! 201) or an [`AppError`](error::AppError) carrying the error code, the HTTP status and
//! the raw payload.
//!
//! ## Usage
//!
//! ```no_run
//! use cloudplugs_client::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let mut session = Session::new()?;
//!     session.set_auth("dev-5359d2857b97bb8946b2584f", "password", false)?;
//!
//!     let response = session
//!         .publish_data(Some("temperature"), &json!({ "data": 21 }))
//!         .await?;
//!     println!("published: {}", response.body());
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, authentication, session and services
pub mod application;
/// Library wide constants
pub mod constants;
/// Error codes and the library error type
pub mod error;
/// Request, body and response models
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Helper utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
