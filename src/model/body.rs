/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::CpResult;
use serde::Serialize;
use serde_json::Value;

/// Body of a request, encoded to text right before it is sent
///
/// Every request body goes through [`Body::encode`], so the wire format of each kind of
/// payload is decided in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// No body, sent as an empty string
    #[default]
    Empty,
    /// A JSON value
    Json(Value),
    /// An integer, sent as its decimal representation
    Integer(i64),
    /// Raw text, sent verbatim
    Text(String),
}

impl Body {
    /// Serializes any value into a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> CpResult<Self> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }

    /// Returns true when the body encodes to an empty string or to an empty JSON container
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Body::Empty => true,
            Body::Json(value) => is_blank_value(value),
            Body::Integer(_) => false,
            Body::Text(text) => text.is_empty(),
        }
    }

    /// Encodes the body into the text sent over the wire
    ///
    /// Objects and arrays become JSON text, integers their decimal form, null and empty
    /// strings an empty body. Non-empty JSON strings stay quoted so the server receives
    /// valid JSON.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Body::Empty => String::new(),
            Body::Integer(n) => n.to_string(),
            Body::Text(text) => text.clone(),
            Body::Json(Value::Null) => String::new(),
            Body::Json(Value::String(s)) if s.is_empty() => String::new(),
            Body::Json(value) => value.to_string(),
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Body::Empty,
            Value::String(s) if s.is_empty() => Body::Empty,
            other => Body::Json(other),
        }
    }
}

impl From<&Value> for Body {
    fn from(value: &Value) -> Self {
        Body::from(value.clone())
    }
}

impl From<i64> for Body {
    fn from(value: i64) -> Self {
        Body::Integer(value)
    }
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Body::Empty
        } else {
            Body::Text(value.to_string())
        }
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Body::from(value.as_str())
    }
}

impl<T: Into<Body>> From<Option<T>> for Body {
    fn from(value: Option<T>) -> Self {
        value.map_or(Body::Empty, Into::into)
    }
}

/// Returns true for null, empty strings and empty containers
pub(crate) fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
