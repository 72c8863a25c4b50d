/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::Session;
use crate::application::interfaces::device::DeviceService;
use crate::constants::{PATH_DEVICE, PATH_LOCATION};
use crate::error::{AppError, CpResult};
use crate::model::body::{Body, is_blank_value};
use crate::model::requests::{
    ControlDeviceRequest, DeviceUpdate, EnrollProductRequest, EnrollPrototypeRequest,
    LocationUpdate,
};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};

fn device_path(plug_id: &str) -> String {
    format!("{PATH_DEVICE}/{plug_id}")
}

/// JSON body for a list of plug ids: a string for one id, an array otherwise
fn plug_ids_body(plug_ids: &[&str]) -> CpResult<Body> {
    if plug_ids.iter().any(|id| id.is_empty()) {
        return Err(AppError::InvalidParameter("empty plug id".to_string()));
    }
    match plug_ids {
        [] => Err(AppError::InvalidParameter("plug id is required".to_string())),
        [single] => Ok(Body::Json(Value::String(single.to_string()))),
        many => Body::json(many),
    }
}

impl Session {
    fn require_master(&self) -> CpResult<()> {
        if !self.is_auth_master() {
            return Err(AppError::InvalidLogin(
                "master authentication required".to_string(),
            ));
        }
        Ok(())
    }

    async fn post_prototype(&self, body: Body) -> CpResult<ApiResponse> {
        self.require_master()?;
        info!("Enrolling prototype");
        self.execute(true, Method::POST, PATH_DEVICE, &[], &[], body)
            .await
    }
}

#[async_trait]
impl DeviceService for Session {
    async fn enroll_prototype(&self, body: &Value) -> CpResult<ApiResponse> {
        if is_blank_value(body) {
            return Err(AppError::InvalidParameter(
                "prototype body is required".to_string(),
            ));
        }
        self.post_prototype(Body::from(body)).await
    }

    async fn enroll_prototype_ex(
        &self,
        request: &EnrollPrototypeRequest,
    ) -> CpResult<ApiResponse> {
        request.validate()?;
        self.post_prototype(Body::json(request)?).await
    }

    async fn enroll_product(&self, request: &EnrollProductRequest) -> CpResult<ApiResponse> {
        request.validate()?;
        info!("Enrolling product of model {}", request.model);
        self.execute(true, Method::POST, PATH_DEVICE, &[], &[], Body::json(request)?)
            .await
    }

    async fn enroll_ctrl(&self, request: &ControlDeviceRequest) -> CpResult<ApiResponse> {
        request.validate()?;
        info!("Enrolling controller for model {}", request.model);
        self.execute(false, Method::PUT, PATH_DEVICE, &[], &[], Body::json(request)?)
            .await
    }

    async fn control_device(&self, request: &ControlDeviceRequest) -> CpResult<ApiResponse> {
        request.validate()?;
        debug!("Controlling device {} of model {}", request.ctrl, request.model);
        self.execute(true, Method::PUT, PATH_DEVICE, &[], &[], Body::json(request)?)
            .await
    }

    async fn uncontrol_device(
        &self,
        plug_id: Option<&str>,
        controlled: &[&str],
    ) -> CpResult<ApiResponse> {
        let body = plug_ids_body(controlled)?;
        let id = self.resolve_plug_id(plug_id)?;
        self.execute(true, Method::DELETE, &device_path(id), &[], &[], body)
            .await
    }

    async fn unenroll(&self, plug_ids: &[&str]) -> CpResult<ApiResponse> {
        let body = if plug_ids.is_empty() {
            plug_ids_body(&[self.get_plug_id()?])?
        } else {
            plug_ids_body(plug_ids)?
        };
        info!("Unenrolling {}", body.encode());
        self.execute(true, Method::DELETE, PATH_DEVICE, &[], &[], body)
            .await
    }

    async fn get_device(&self, plug_id: Option<&str>) -> CpResult<ApiResponse> {
        let id = self.resolve_plug_id(plug_id)?;
        self.execute(true, Method::GET, &device_path(id), &[], &[], Body::Empty)
            .await
    }

    async fn set_device(
        &self,
        plug_id: Option<&str>,
        update: &DeviceUpdate,
    ) -> CpResult<ApiResponse> {
        update.validate()?;
        let id = self.resolve_plug_id(plug_id)?;
        self.execute(true, Method::PATCH, &device_path(id), &[], &[], Body::json(update)?)
            .await
    }

    async fn get_device_prop(
        &self,
        plug_id: Option<&str>,
        prop: Option<&str>,
    ) -> CpResult<ApiResponse> {
        let id = self.resolve_plug_id(plug_id)?;
        let path = format!("{}/{}", device_path(id), prop.unwrap_or_default());
        self.execute(true, Method::GET, &path, &[], &[], Body::Empty)
            .await
    }

    async fn set_device_prop(
        &self,
        plug_id: Option<&str>,
        prop: Option<&str>,
        value: &Value,
    ) -> CpResult<ApiResponse> {
        let prop = prop.unwrap_or_default();
        if prop.is_empty() && !(value.is_object() || value.is_null()) {
            return Err(AppError::InvalidParameter(
                "an object of properties is required when no property is named".to_string(),
            ));
        }
        let id = self.resolve_plug_id(plug_id)?;
        let path = format!("{}/{}", device_path(id), prop);
        self.execute(true, Method::PATCH, &path, &[], &[], Body::from(value))
            .await
    }

    async fn remove_device_prop(
        &self,
        plug_id: Option<&str>,
        prop: &str,
    ) -> CpResult<ApiResponse> {
        if prop.is_empty() {
            return Err(AppError::InvalidParameter(
                "property name is required".to_string(),
            ));
        }
        let id = self.resolve_plug_id(plug_id)?;
        let path = format!("{}/{}", device_path(id), prop);
        self.execute(true, Method::DELETE, &path, &[], &[], Body::Empty)
            .await
    }

    async fn get_device_location(&self, plug_id: Option<&str>) -> CpResult<ApiResponse> {
        let id = self.resolve_plug_id(plug_id)?;
        let path = format!("{}/{PATH_LOCATION}", device_path(id));
        self.execute(true, Method::GET, &path, &[], &[], Body::Empty)
            .await
    }

    async fn set_device_location(
        &self,
        plug_id: Option<&str>,
        location: &LocationUpdate,
    ) -> CpResult<ApiResponse> {
        location.validate()?;
        let id = self.resolve_plug_id(plug_id)?;
        let path = format!("{}/{PATH_LOCATION}", device_path(id));
        self.execute(true, Method::PATCH, &path, &[], &[], Body::json(location)?)
            .await
    }
}
