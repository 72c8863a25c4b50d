/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::{AppError, CpResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP status 200
pub const HTTP_OK: u16 = 200;
/// HTTP status 201
pub const HTTP_CREATED: u16 = 201;

const HTTP_RESULT_STRINGS: [(u16, &str); 14] = [
    (200, "Ok"),
    (201, "Created"),
    (207, "Multi-Status"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
];

/// Human readable description of the HTTP statuses used by the CloudPlugs API
///
/// Returns `None` for any status the API does not document, including 0.
#[must_use]
pub fn http_result_string(status: u16) -> Option<&'static str> {
    HTTP_RESULT_STRINGS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Returns true for the statuses treated as success (200 and 201)
#[must_use]
pub fn is_success_status(status: u16) -> bool {
    status == HTTP_OK || status == HTTP_CREATED
}

/// Successful response of the CloudPlugs API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code (200 or 201)
    pub status: u16,
    /// Response headers, in the order received
    pub headers: Vec<(String, String)>,
    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Creates a response from its parts
    pub fn new(status: u16, headers: Vec<(String, String)>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw response body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns true if the server answered 201 Created
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.status == HTTP_CREATED
    }

    /// Human readable description of the status
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        http_result_string(self.status)
    }

    /// Value of a response header, matched case-insensitively
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> CpResult<T> {
        serde_json::from_str(&self.body).map_err(|e| AppError::JsonParse(e.to_string()))
    }
}
