use crate::error::CpResult;
use crate::model::requests::{
    ControlDeviceRequest, DeviceUpdate, EnrollProductRequest, EnrollPrototypeRequest,
    LocationUpdate,
};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the device management endpoints
///
/// Every `plug_id` argument is optional: when `None` (or empty) the plug id authenticated
/// in the session is used, which fails with `InvalidLogin` for a session authenticated
/// with an email.
#[async_trait]
pub trait DeviceService: Send + Sync {
    /// Enrolls a prototype from a raw JSON body (master authentication required)
    async fn enroll_prototype(&self, body: &Value) -> CpResult<ApiResponse>;

    /// Enrolls a prototype (master authentication required)
    async fn enroll_prototype_ex(&self, request: &EnrollPrototypeRequest)
    -> CpResult<ApiResponse>;

    /// Enrolls a production device
    async fn enroll_product(&self, request: &EnrollProductRequest) -> CpResult<ApiResponse>;

    /// Enrolls a new or existing controller device; no authentication is required
    ///
    /// Sent as `PUT device`, the method the CloudPlugs server expects for this call.
    async fn enroll_ctrl(&self, request: &ControlDeviceRequest) -> CpResult<ApiResponse>;

    /// Takes control of an existing device
    async fn control_device(&self, request: &ControlDeviceRequest) -> CpResult<ApiResponse>;

    /// Releases the control of one or more devices
    ///
    /// # Arguments
    /// * `plug_id` - The controller
    /// * `controlled` - Plug ids of the controlled devices to release, at least one
    async fn uncontrol_device(
        &self,
        plug_id: Option<&str>,
        controlled: &[&str],
    ) -> CpResult<ApiResponse>;

    /// Removes one or more devices; an empty list removes the session device
    async fn unenroll(&self, plug_ids: &[&str]) -> CpResult<ApiResponse>;

    /// Reads the information and properties of a device
    async fn get_device(&self, plug_id: Option<&str>) -> CpResult<ApiResponse>;

    /// Modifies a device
    async fn set_device(&self, plug_id: Option<&str>, update: &DeviceUpdate)
    -> CpResult<ApiResponse>;

    /// Reads one property, or all of them when `prop` is `None`
    async fn get_device_prop(&self, plug_id: Option<&str>, prop: Option<&str>)
    -> CpResult<ApiResponse>;

    /// Writes or deletes properties
    ///
    /// With a `prop` the single property is written, or deleted when `value` is null.
    /// Without a `prop`, `value` must be an object of properties, or null to delete them all.
    async fn set_device_prop(
        &self,
        plug_id: Option<&str>,
        prop: Option<&str>,
        value: &Value,
    ) -> CpResult<ApiResponse>;

    /// Deletes a single property
    async fn remove_device_prop(&self, plug_id: Option<&str>, prop: &str) -> CpResult<ApiResponse>;

    /// Reads the location of a device
    async fn get_device_location(&self, plug_id: Option<&str>) -> CpResult<ApiResponse>;

    /// Writes the location of a device
    async fn set_device_location(
        &self,
        plug_id: Option<&str>,
        location: &LocationUpdate,
    ) -> CpResult<ApiResponse>;
}
