/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session with the CloudPlugs REST API
//!
//! The [`Session`] holds the base URL, the timeout, the TLS verification flag and the
//! authentication state, and executes every request of the library through
//! [`Session::execute`]. Nothing about a request outcome is stored on the session: each
//! call returns its own result.

use crate::application::auth::PlugAuth;
use crate::application::config::Config;
use crate::constants::{CONTENT_TYPE_JSON, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{AppError, CpResult};
use crate::model::body::Body;
use crate::model::http::{build_http_client, make_http_request};
use crate::model::responses::ApiResponse;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpInternalClient, Method};
use std::time::Duration;
use tracing::{debug, info, warn};

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// Session with the CloudPlugs REST API
///
/// A new session uses the public API URL, a 60 second timeout, no TLS certificate
/// verification and no authentication.
pub struct Session {
    http_client: HttpInternalClient,
    base_url: String,
    timeout: u64,
    verify_tls: bool,
    auth: Option<PlugAuth>,
}

impl Session {
    /// Creates an unauthenticated session with the default settings
    pub fn new() -> CpResult<Self> {
        Ok(Self {
            http_client: build_http_client(false)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
            auth: None,
        })
    }

    /// Creates a session from a configuration
    ///
    /// The credentials are applied only when both the id and the password are present.
    pub fn from_config(config: &Config) -> CpResult<Self> {
        let mut session = Self::new()?;
        session.set_base_url(&config.rest_api.base_url)?;
        session.set_timeout(config.rest_api.timeout);
        session.set_verify_tls(config.rest_api.verify_tls)?;

        match config.credentials.pair() {
            Some((id, pass)) => session.set_auth(id, pass, config.credentials.master)?,
            None => debug!("No credentials configured, session left unauthenticated"),
        }
        Ok(session)
    }

    /// Changes the base URL
    ///
    /// The URL must start with `http://` or `https://`; a trailing `/` is added when missing.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidParameter)` - If the URL is empty or has another scheme
    pub fn set_base_url(&mut self, url: &str) -> CpResult<()> {
        if !(url.starts_with(HTTP_SCHEME) || url.starts_with(HTTPS_SCHEME)) {
            return Err(AppError::InvalidParameter(format!(
                "base url must start with {HTTP_SCHEME} or {HTTPS_SCHEME}: {url:?}"
            )));
        }

        let mut base_url = url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        debug!("Base url set to {}", base_url);
        self.base_url = base_url;
        Ok(())
    }

    /// Current base URL, always ending with `/`
    #[must_use]
    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    /// Changes the request timeout in seconds; 0 restores the default of 60 seconds
    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = if timeout == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout
        };
    }

    /// Current request timeout in seconds
    #[must_use]
    pub fn get_timeout(&self) -> u64 {
        self.timeout
    }

    /// Enables or disables the verification of the server certificate
    ///
    /// The HTTP client is rebuilt, so pooled connections are dropped.
    pub fn set_verify_tls(&mut self, verify_tls: bool) -> CpResult<()> {
        if verify_tls == self.verify_tls {
            return Ok(());
        }
        if !verify_tls {
            warn!("TLS certificate verification disabled");
        }
        self.http_client = build_http_client(verify_tls)?;
        self.verify_tls = verify_tls;
        Ok(())
    }

    /// Whether the server certificate is verified
    #[must_use]
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Sets the authentication credentials of the session
    ///
    /// # Arguments
    /// * `id` - Plug id of a device, or email of a master account
    /// * `pass` - Device password or master password
    /// * `is_master` - True to use master authentication
    ///
    /// # Returns
    /// * `Err(AppError::InvalidParameter)` - If `id` or `pass` is empty; the previous
    ///   credentials are kept
    pub fn set_auth(&mut self, id: &str, pass: &str, is_master: bool) -> CpResult<()> {
        let auth = PlugAuth::new(id, pass, is_master)?;
        info!(
            "Authentication set: {} / {}",
            auth.identity().name,
            auth.secret().name
        );
        self.auth = Some(auth);
        Ok(())
    }

    /// Removes the authentication credentials
    pub fn clear_auth(&mut self) {
        self.auth = None;
    }

    /// Authentication state, if any
    #[must_use]
    pub fn auth(&self) -> Option<&PlugAuth> {
        self.auth.as_ref()
    }

    /// The authentication id (plug id or email)
    ///
    /// # Returns
    /// * `Err(AppError::InvalidParameter)` - If no credentials are set
    pub fn get_auth_id(&self) -> CpResult<&str> {
        self.auth
            .as_ref()
            .map(PlugAuth::id)
            .ok_or_else(|| AppError::InvalidParameter("authentication not set".to_string()))
    }

    /// The authentication password
    ///
    /// # Returns
    /// * `Err(AppError::InvalidParameter)` - If no credentials are set
    pub fn get_auth_pass(&self) -> CpResult<&str> {
        self.auth
            .as_ref()
            .map(PlugAuth::pass)
            .ok_or_else(|| AppError::InvalidParameter("authentication not set".to_string()))
    }

    /// Whether the session uses master authentication
    #[must_use]
    pub fn is_auth_master(&self) -> bool {
        self.auth.as_ref().is_some_and(PlugAuth::is_master)
    }

    /// The plug id of the device authenticated in the session
    ///
    /// # Returns
    /// * `Err(AppError::InvalidLogin)` - If no credentials are set or the session is
    ///   authenticated with an email
    pub fn get_plug_id(&self) -> CpResult<&str> {
        match &self.auth {
            Some(auth) => auth.plug_id(),
            None => Err(AppError::InvalidLogin("authentication not set".to_string())),
        }
    }

    /// Returns `plug_id` when given and non-empty, the plug id of the session otherwise
    pub(crate) fn resolve_plug_id<'a>(&'a self, plug_id: Option<&'a str>) -> CpResult<&'a str> {
        match plug_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => self.get_plug_id(),
        }
    }

    /// Headers sent with a request
    ///
    /// With credentials set, the caller headers are followed by the identity and secret
    /// headers, which replace caller headers of the same name. Without credentials no
    /// custom header is sent. `Content-Type: application/json` is always last.
    #[must_use]
    pub fn compose_headers(&self, headers: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut composed = Vec::with_capacity(headers.len() + 3);

        if let Some(auth) = &self.auth {
            let reserved = auth.headers().map(|(name, _)| name);
            composed.extend(
                headers
                    .iter()
                    .filter(|(name, _)| {
                        !name.eq_ignore_ascii_case(CONTENT_TYPE.as_str())
                            && !reserved.iter().any(|r| r.eq_ignore_ascii_case(name))
                    })
                    .map(|(name, value)| (name.to_string(), value.to_string())),
            );
            composed.extend(
                auth.headers()
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string())),
            );
        }

        composed.push((
            CONTENT_TYPE.as_str().to_string(),
            CONTENT_TYPE_JSON.to_string(),
        ));
        composed
    }

    /// Executes a request against the CloudPlugs API
    ///
    /// # Arguments
    /// * `requires_auth` - Fail without a network call when no credentials are set
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL
    /// * `headers` - Additional headers, only sent with credentials set
    /// * `query` - Query string pairs
    /// * `body` - Request body
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - The server answered 200 or 201
    /// * `Err(AppError::InvalidLogin)` - Credentials required but not set
    /// * `Err(AppError::Http)` - The server answered another status
    /// * `Err(AppError::Transport)` - No response was received
    pub async fn execute(
        &self,
        requires_auth: bool,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
        query: &[(String, String)],
        body: Body,
    ) -> CpResult<ApiResponse> {
        if requires_auth && self.auth.is_none() {
            return Err(AppError::InvalidLogin(
                "authentication required for this request".to_string(),
            ));
        }

        let url = format!("{}{}", self.base_url, path);
        let headers = self.compose_headers(headers);

        make_http_request(
            &self.http_client,
            method,
            &url,
            &headers,
            query,
            body.encode(),
            Duration::from_secs(self.timeout),
        )
        .await
    }
}
