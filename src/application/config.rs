/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Authentication credentials for the CloudPlugs API
pub struct Credentials {
    /// Plug id of the device, or email of the master account
    pub plug_id: Option<String>,
    /// Device password or master password
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Whether the password is the master password
    pub master: bool,
}

impl Credentials {
    /// Returns the id and password when both are present and non-empty
    #[must_use]
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.plug_id.as_deref(), self.password.as_deref()) {
            (Some(id), Some(pass)) if !id.is_empty() && !pass.is_empty() => Some((id, pass)),
            _ => None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the CloudPlugs REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Whether the server certificate is verified
    pub verify_tls: bool,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Main configuration for the CloudPlugs client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present. The variables
    /// read are `CLOUDPLUGS_PLUG_ID`, `CLOUDPLUGS_PASSWORD`, `CLOUDPLUGS_MASTER`,
    /// `CLOUDPLUGS_BASE_URL`, `CLOUDPLUGS_TIMEOUT` and `CLOUDPLUGS_VERIFY_TLS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let plug_id: Option<String> = get_env_or_none("CLOUDPLUGS_PLUG_ID");
        let password: Option<String> = get_env_or_none("CLOUDPLUGS_PASSWORD");

        if plug_id.is_none() {
            warn!("CLOUDPLUGS_PLUG_ID not found in environment variables or .env file");
        }
        if password.is_none() {
            warn!("CLOUDPLUGS_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                plug_id,
                password,
                master: get_env_flag("CLOUDPLUGS_MASTER", false),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("CLOUDPLUGS_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("CLOUDPLUGS_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                verify_tls: get_env_flag("CLOUDPLUGS_VERIFY_TLS", false),
            },
        }
    }
}
