/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication state of a session
//!
//! CloudPlugs authenticates every request with two headers:
//! - an identity header: `X-Plug-Id` for a device, `X-Plug-Email` for a master account
//! - a secret header: `X-Plug-Auth` for a device password, `X-Plug-Master` for the
//!   master password
//!
//! The identity header is chosen from the shape of the id alone (an email contains `@`),
//! the secret header from the master flag alone.

use crate::constants::{PLUG_AUTH_HEADER, PLUG_EMAIL_HEADER, PLUG_ID_HEADER, PLUG_MASTER_HEADER};
use crate::error::{AppError, CpResult};
use std::fmt;

/// A header name paired with its value
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    /// Header name
    pub name: &'static str,
    /// Header value
    pub value: String,
}

impl AuthHeader {
    /// The header line as sent on the wire, `"<name>: <value>"`
    #[must_use]
    pub fn composed(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeader")
            .field("name", &self.name)
            .field("value", &"***")
            .finish()
    }
}

/// Credentials attached to every authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlugAuth {
    identity: AuthHeader,
    secret: AuthHeader,
    master: bool,
}

impl PlugAuth {
    /// Builds the authentication headers for an id and a password
    ///
    /// # Arguments
    /// * `id` - Plug id of a device, or email of a master account
    /// * `pass` - Device password or master password
    /// * `is_master` - True when `pass` is the master password
    ///
    /// # Returns
    /// * `Err(AppError::InvalidParameter)` - If `id` or `pass` is empty
    pub fn new(id: &str, pass: &str, is_master: bool) -> CpResult<Self> {
        if id.is_empty() || pass.is_empty() {
            return Err(AppError::InvalidParameter(
                "authentication id and password are required".to_string(),
            ));
        }

        let identity_name = if is_email(id) {
            PLUG_EMAIL_HEADER
        } else {
            PLUG_ID_HEADER
        };
        let secret_name = if is_master {
            PLUG_MASTER_HEADER
        } else {
            PLUG_AUTH_HEADER
        };

        Ok(Self {
            identity: AuthHeader {
                name: identity_name,
                value: id.to_string(),
            },
            secret: AuthHeader {
                name: secret_name,
                value: pass.to_string(),
            },
            master: is_master,
        })
    }

    /// Identity header
    #[must_use]
    pub fn identity(&self) -> &AuthHeader {
        &self.identity
    }

    /// Secret header
    #[must_use]
    pub fn secret(&self) -> &AuthHeader {
        &self.secret
    }

    /// The id, without its header name
    #[must_use]
    pub fn id(&self) -> &str {
        &self.identity.value
    }

    /// The password, without its header name
    #[must_use]
    pub fn pass(&self) -> &str {
        &self.secret.value
    }

    /// Whether the session uses master authentication
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.master
    }

    /// Whether the identity is the email of a master account
    #[must_use]
    pub fn is_email(&self) -> bool {
        self.identity.name == PLUG_EMAIL_HEADER
    }

    /// The plug id of the authenticated device
    ///
    /// # Returns
    /// * `Err(AppError::InvalidLogin)` - If the identity is an email
    pub fn plug_id(&self) -> CpResult<&str> {
        if self.is_email() {
            return Err(AppError::InvalidLogin(
                "the session is authenticated with an email, a plug id is required".to_string(),
            ));
        }
        Ok(self.id())
    }

    /// Header name to value pairs, identity first
    #[must_use]
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (self.identity.name, self.identity.value.as_str()),
            (self.secret.name, self.secret.value.as_str()),
        ]
    }
}

/// Returns true when the id has the shape of an email
#[must_use]
pub fn is_email(id: &str) -> bool {
    id.contains('@')
}
