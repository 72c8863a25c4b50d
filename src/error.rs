/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error codes and error type of the library
//!
//! [`ErrorCode`] is the closed set of codes reported by the CloudPlugs client, each with a
//! fixed human readable message. [`AppError`] is the error returned by every fallible
//! operation and always maps back to one of those codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type used across the library
pub type CpResult<T> = Result<T, AppError>;

/// Error codes reported by the client
///
/// Codes from `InternalError` to `HeadersMustBeString` are never produced by this
/// implementation; they are kept so that callers matching on the full code set keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ErrorCode {
    /// Internal library error
    InternalError = 1,
    /// Out of memory
    OutOfMemory = 2,
    /// Invalid session
    InvalidSession = 3,
    /// The query is not an object
    QueryIsNotAnObject = 4,
    /// The query contains an invalid type
    QueryInvalidType = 5,
    /// A header value is not a string
    HeadersMustBeString = 6,
    /// Missing or empty required parameter
    InvalidParameter = 7,
    /// Missing or insufficient authentication
    InvalidLogin = 8,
    /// Response body is not valid JSON
    JsonParse = 9,
    /// Request body cannot be encoded as JSON
    JsonEncode = 10,
    /// Transport failure or unsuccessful HTTP status
    Http = 11,
}

const ERROR_MESSAGES: [(ErrorCode, &str); 11] = [
    (ErrorCode::InternalError, "Internal Library Error"),
    (ErrorCode::OutOfMemory, "Out of memory"),
    (ErrorCode::InvalidSession, "Invalid session"),
    (ErrorCode::QueryIsNotAnObject, "Query is not an object"),
    (ErrorCode::QueryInvalidType, "Query contain invalid type"),
    (ErrorCode::HeadersMustBeString, "Header value must be a string"),
    (ErrorCode::InvalidParameter, "Invalid parameter"),
    (ErrorCode::InvalidLogin, "Invalid login"),
    (ErrorCode::JsonParse, "JSON parse error"),
    (ErrorCode::JsonEncode, "JSON encode error"),
    (ErrorCode::Http, "HTTP error"),
];

impl ErrorCode {
    /// All error codes, ordered by value
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::InternalError,
        ErrorCode::OutOfMemory,
        ErrorCode::InvalidSession,
        ErrorCode::QueryIsNotAnObject,
        ErrorCode::QueryInvalidType,
        ErrorCode::HeadersMustBeString,
        ErrorCode::InvalidParameter,
        ErrorCode::InvalidLogin,
        ErrorCode::JsonParse,
        ErrorCode::JsonEncode,
        ErrorCode::Http,
    ];

    /// Numeric value of the code
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human readable message describing the code
    #[must_use]
    pub fn message(self) -> &'static str {
        ERROR_MESSAGES
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, message)| *message)
            .unwrap_or("Unknown error")
    }

    /// Looks up a code by its numeric value
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.value() == value)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error returned by the CloudPlugs client
#[derive(Debug, Error)]
pub enum AppError {
    /// A required argument is missing, empty or out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Authentication is missing or not allowed for the operation
    #[error("invalid login: {0}")]
    InvalidLogin(String),
    /// The server answered with a status other than 200 or 201
    #[error("http error {status}: {body}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The request did not complete (connection, timeout, DNS...)
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body could not be decoded
    #[error("json parse error: {0}")]
    JsonParse(String),
    /// A request body could not be encoded
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
    /// The HTTP transport could not be initialised
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Error code associated with this error
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidParameter(_) => ErrorCode::InvalidParameter,
            AppError::InvalidLogin(_) => ErrorCode::InvalidLogin,
            AppError::Http { .. } | AppError::Transport(_) => ErrorCode::Http,
            AppError::JsonParse(_) => ErrorCode::JsonParse,
            AppError::Json(_) => ErrorCode::JsonEncode,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// HTTP status of the failed exchange, 0 when no response was received
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::Http { status, .. } => *status,
            _ => 0,
        }
    }

    /// Raw payload of the failure: the response body or the transport error text
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match self {
            AppError::Http { body, .. } => Some(body),
            AppError::Transport(text) => Some(text),
            _ => None,
        }
    }

    /// Human readable message of the error code
    #[must_use]
    pub fn code_message(&self) -> &'static str {
        self.code().message()
    }
}
