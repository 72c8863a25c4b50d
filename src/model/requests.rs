/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::{AppError, CpResult};
use crate::utils::id::get_id;
use chrono::Utc;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_zero(value: &Option<u64>) -> bool {
    value.is_none_or(|n| n == 0)
}

fn require(field: &str, value: &str) -> CpResult<()> {
    if value.is_empty() {
        return Err(AppError::InvalidParameter(format!("{field} is required")));
    }
    Ok(())
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

/// Filter shared by the data and channel queries
///
/// Only the fields holding a non-empty string or a non-zero number are sent.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFilter {
    /// Timestamp or object id; only entries published before it
    #[serde(skip_serializing_if = "is_blank")]
    pub before: Option<String>,
    /// Timestamp or object id; only entries published after it
    #[serde(skip_serializing_if = "is_blank")]
    pub after: Option<String>,
    /// Comma separated list of timestamps
    #[serde(skip_serializing_if = "is_blank")]
    pub at: Option<String>,
    /// Comma separated list of plug ids of the publishers
    #[serde(skip_serializing_if = "is_blank")]
    pub of: Option<String>,
    /// Number of entries to skip
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: Option<u64>,
    /// Maximum number of entries to return
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: Option<u64>,
}

impl DataFilter {
    /// Creates an empty filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `before` bound
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = non_empty(before);
        self
    }

    /// Set the `after` bound
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = non_empty(after);
        self
    }

    /// Set the timestamps to match
    pub fn with_at(mut self, at: impl Into<String>) -> Self {
        self.at = non_empty(at);
        self
    }

    /// Set the publishers to match
    pub fn with_of(mut self, of: impl Into<String>) -> Self {
        self.of = non_empty(of);
        self
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset).filter(|n| *n > 0);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit).filter(|n| *n > 0);
        self
    }

    /// Returns true when no field would be sent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    /// Query string pairs for the fields that are set
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let strings = [
            ("before", &self.before),
            ("after", &self.after),
            ("at", &self.at),
            ("of", &self.of),
        ];
        for (name, value) in strings {
            if let Some(v) = value.as_deref().filter(|s| !s.is_empty()) {
                query.push((name.to_string(), v.to_string()));
            }
        }
        for (name, value) in [("offset", self.offset), ("limit", self.limit)] {
            if let Some(n) = value.filter(|n| *n > 0) {
                query.push((name.to_string(), n.to_string()));
            }
        }
        query
    }
}

/// Selection of published data to remove
///
/// At least one of `id`, `before`, `after` or `at` must be set.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveDataRequest {
    /// Comma separated object ids
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    /// Timestamp or object id upper bound
    #[serde(skip_serializing_if = "is_blank")]
    pub before: Option<String>,
    /// Timestamp or object id lower bound
    #[serde(skip_serializing_if = "is_blank")]
    pub after: Option<String>,
    /// Comma separated timestamps
    #[serde(skip_serializing_if = "is_blank")]
    pub at: Option<String>,
    /// Comma separated plug ids of the publishers
    #[serde(skip_serializing_if = "is_blank")]
    pub of: Option<String>,
}

impl RemoveDataRequest {
    /// Removes the entries with the given object ids
    pub fn by_id(id: impl Into<String>) -> CpResult<Self> {
        Self::default().with_id(id).validated()
    }

    /// Removes the entries published before the given bound
    pub fn before(before: impl Into<String>) -> CpResult<Self> {
        Self::default().with_before(before).validated()
    }

    /// Removes the entries published after the given bound
    pub fn after(after: impl Into<String>) -> CpResult<Self> {
        Self::default().with_after(after).validated()
    }

    /// Removes the entries published at the given timestamps
    pub fn at(at: impl Into<String>) -> CpResult<Self> {
        Self::default().with_at(at).validated()
    }

    /// Set the object ids
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = non_empty(id);
        self
    }

    /// Set the `before` bound
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = non_empty(before);
        self
    }

    /// Set the `after` bound
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = non_empty(after);
        self
    }

    /// Set the timestamps
    pub fn with_at(mut self, at: impl Into<String>) -> Self {
        self.at = non_empty(at);
        self
    }

    /// Restrict to the given publishers
    pub fn with_of(mut self, of: impl Into<String>) -> Self {
        self.of = non_empty(of);
        self
    }

    /// Checks that at least one selector is set
    pub fn validate(&self) -> CpResult<()> {
        if is_blank(&self.id) && is_blank(&self.before) && is_blank(&self.after) && is_blank(&self.at)
        {
            return Err(AppError::InvalidParameter(
                "one of id, before, after or at is required".to_string(),
            ));
        }
        Ok(())
    }

    fn validated(self) -> CpResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// A single data entry to publish
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PublishRequest {
    /// Object id of an existing entry to update
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    /// Channel, overriding the one in the url
    #[serde(skip_serializing_if = "is_blank")]
    pub channel: Option<String>,
    /// Payload to publish
    pub data: Value,
    /// Timestamp of the entry in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<i64>,
    /// Plug id of the publisher
    #[serde(skip_serializing_if = "is_blank")]
    pub of: Option<String>,
    /// Expiration timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<i64>,
    /// Lifetime of the entry in seconds, ignored when `expire_at` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

impl PublishRequest {
    /// Creates an entry with the given payload
    pub fn new(data: Value) -> CpResult<Self> {
        if data.is_null() {
            return Err(AppError::InvalidParameter("data is required".to_string()));
        }
        Ok(Self {
            id: None,
            channel: None,
            data,
            at: None,
            of: None,
            expire_at: None,
            ttl: None,
        })
    }

    /// Set the object id to update
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = non_empty(id);
        self
    }

    /// Set the channel
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = non_empty(channel);
        self
    }

    /// Set the timestamp
    pub fn with_at(mut self, at: i64) -> Self {
        self.at = Some(at);
        self
    }

    /// Set the timestamp to the current time
    pub fn with_at_now(mut self) -> Self {
        self.at = Some(Utc::now().timestamp_millis());
        self
    }

    /// Set the publisher
    pub fn with_of(mut self, of: impl Into<String>) -> Self {
        self.of = non_empty(of);
        self
    }

    /// Set the expiration timestamp
    pub fn with_expire_at(mut self, expire_at: i64) -> Self {
        self.expire_at = Some(expire_at);
        self
    }

    /// Set the lifetime in seconds
    pub fn with_ttl(mut self, ttl: u64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Checks that a payload is present
    pub fn validate(&self) -> CpResult<()> {
        if self.data.is_null() {
            return Err(AppError::InvalidParameter("data is required".to_string()));
        }
        Ok(())
    }
}

/// Enrollment of a prototype device (master authentication required)
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollPrototypeRequest {
    /// Hardware id, generated by the server when absent
    #[serde(skip_serializing_if = "is_blank")]
    pub hwid: Option<String>,
    /// Device name
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// Device password, defaults to the master password of the company
    #[serde(skip_serializing_if = "is_blank")]
    pub pass: Option<String>,
    /// Sharing filters, all permitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perm: Option<Value>,
    /// Initial custom properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl EnrollPrototypeRequest {
    /// Creates the request; at least one of `hwid` or `name` is required
    pub fn new(hwid: Option<&str>, name: Option<&str>) -> CpResult<Self> {
        let request = Self {
            hwid: hwid.and_then(|s| non_empty(s)),
            name: name.and_then(|s| non_empty(s)),
            ..Self::default()
        };
        request.validate()?;
        Ok(request)
    }

    /// Creates a named prototype with a random hardware id
    pub fn with_random_hwid(name: &str) -> CpResult<Self> {
        let hwid = get_id();
        Self::new(Some(&hwid), Some(name))
    }

    /// Set the password
    pub fn with_pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = non_empty(pass);
        self
    }

    /// Set the sharing filters
    pub fn with_perm(mut self, perm: Value) -> Self {
        self.perm = Some(perm).filter(|v| !v.is_null());
        self
    }

    /// Set the initial properties
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = Some(props).filter(|v| !v.is_null());
        self
    }

    /// Checks that the device can be identified
    pub fn validate(&self) -> CpResult<()> {
        if is_blank(&self.hwid) && is_blank(&self.name) {
            return Err(AppError::InvalidParameter(
                "hwid or name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Enrollment of a production device
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct EnrollProductRequest {
    /// Plug id of the device model
    pub model: String,
    /// Serial number of the device
    pub hwid: String,
    /// Device password
    pub pass: String,
    /// Initial custom properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl EnrollProductRequest {
    /// Creates the request from the mandatory fields
    pub fn new(
        model: impl Into<String>,
        hwid: impl Into<String>,
        pass: impl Into<String>,
    ) -> CpResult<Self> {
        let request = Self {
            model: model.into(),
            hwid: hwid.into(),
            pass: pass.into(),
            props: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Set the initial properties
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = Some(props).filter(|v| !v.is_null());
        self
    }

    /// Checks the mandatory fields
    pub fn validate(&self) -> CpResult<()> {
        require("model", &self.model)?;
        require("hwid", &self.hwid)?;
        require("pass", &self.pass)
    }
}

/// Controller enrollment or control of an existing device
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ControlDeviceRequest {
    /// Plug id of the model of the device to control
    pub model: String,
    /// Serial number of the device to control
    pub ctrl: String,
    /// Password of the device to control
    pub pass: String,
    /// Hardware id of this controller
    #[serde(skip_serializing_if = "is_blank")]
    pub hwid: Option<String>,
    /// Name of this controller
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
}

impl ControlDeviceRequest {
    /// Creates the request from the mandatory fields
    pub fn new(
        model: impl Into<String>,
        ctrl: impl Into<String>,
        pass: impl Into<String>,
    ) -> CpResult<Self> {
        let request = Self {
            model: model.into(),
            ctrl: ctrl.into(),
            pass: pass.into(),
            hwid: None,
            name: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Set the hardware id of the controller
    pub fn with_hwid(mut self, hwid: impl Into<String>) -> Self {
        self.hwid = non_empty(hwid);
        self
    }

    /// Set the name of the controller
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name);
        self
    }

    /// Checks the mandatory fields
    pub fn validate(&self) -> CpResult<()> {
        require("model", &self.model)?;
        require("ctrl", &self.ctrl)?;
        require("pass", &self.pass)
    }
}

/// Partial update of a device
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceUpdate {
    /// Sharing filters to modify
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perm: Option<Value>,
    /// New device name
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// New device status
    #[serde(skip_serializing_if = "is_blank")]
    pub status: Option<String>,
    /// Properties to modify
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl DeviceUpdate {
    /// Creates an empty update
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sharing filters
    pub fn with_perm(mut self, perm: Value) -> Self {
        self.perm = Some(perm).filter(|v| !v.is_null());
        self
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(status);
        self
    }

    /// Set the properties
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = Some(props).filter(|v| !v.is_null());
        self
    }

    /// Checks that the update changes something
    pub fn validate(&self) -> CpResult<()> {
        if self.perm.is_none() && is_blank(&self.name) && is_blank(&self.status) && self.props.is_none()
        {
            return Err(AppError::InvalidParameter("empty device update".to_string()));
        }
        Ok(())
    }
}

/// New location of a device
///
/// `x` is the longitude and `y` the latitude, both in degrees. Accuracy (`r`), altitude
/// (`z`) and timestamp (`t`) are optional and only accepted when non-negative.
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct LocationUpdate {
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
    /// Accuracy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    /// Altitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
}

impl LocationUpdate {
    /// Creates a location, rejecting coordinates out of range
    pub fn new(longitude: f64, latitude: f64) -> CpResult<Self> {
        let location = Self {
            x: longitude,
            y: latitude,
            r: None,
            z: None,
            t: None,
        };
        location.validate()?;
        Ok(location)
    }

    /// Set the accuracy; negative values leave it unset
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.r = Some(accuracy).filter(|v| *v >= 0.0);
        self
    }

    /// Set the altitude; negative values leave it unset
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.z = Some(altitude).filter(|v| *v >= 0.0);
        self
    }

    /// Set the timestamp; negative values leave it unset
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.t = Some(timestamp).filter(|v| *v >= 0.0);
        self
    }

    /// Set the timestamp to the current time
    pub fn with_timestamp_now(self) -> Self {
        self.with_timestamp(Utc::now().timestamp_millis() as f64)
    }

    /// Checks the coordinate ranges and the optional fields
    pub fn validate(&self) -> CpResult<()> {
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.x) {
            return Err(AppError::InvalidParameter(format!(
                "longitude {} out of range",
                self.x
            )));
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.y) {
            return Err(AppError::InvalidParameter(format!(
                "latitude {} out of range",
                self.y
            )));
        }
        for (name, value) in [("accuracy", self.r), ("altitude", self.z), ("timestamp", self.t)] {
            if value.is_some_and(|v| v.is_nan() || v < 0.0) {
                return Err(AppError::InvalidParameter(format!("{name} must be >= 0")));
            }
        }
        Ok(())
    }
}
