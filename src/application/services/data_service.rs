/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::Session;
use crate::application::interfaces::data::DataService;
use crate::constants::{PATH_CHANNEL, PATH_DATA};
use crate::error::{AppError, CpResult};
use crate::model::body::{Body, is_blank_value};
use crate::model::requests::{DataFilter, PublishRequest, RemoveDataRequest};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

const CHANNEL_FIELD: &str = "channel";

/// `base` or `base/{suffix}` when a non-empty suffix is given
fn join_path(base: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(s) if !s.is_empty() => format!("{base}/{s}"),
        _ => base.to_string(),
    }
}

fn require_mask(channel_mask: &str) -> CpResult<()> {
    if channel_mask.is_empty() {
        return Err(AppError::InvalidParameter(
            "channel mask is required".to_string(),
        ));
    }
    Ok(())
}

fn has_channel(entry: &Value) -> bool {
    entry
        .get(CHANNEL_FIELD)
        .and_then(Value::as_str)
        .is_some_and(|c| !c.is_empty())
}

/// Without a channel in the url every entry must name its own
fn check_entries(channel: Option<&str>, body: &Value) -> CpResult<()> {
    if is_blank_value(body) {
        return Err(AppError::InvalidParameter("data is required".to_string()));
    }
    if channel.is_some_and(|c| !c.is_empty()) {
        return Ok(());
    }
    let complete = match body {
        Value::Object(_) => has_channel(body),
        Value::Array(entries) => entries.iter().all(has_channel),
        _ => false,
    };
    if !complete {
        return Err(AppError::InvalidParameter(
            "a channel is required in the url or in every entry".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl DataService for Session {
    async fn publish_data(&self, channel: Option<&str>, body: &Value) -> CpResult<ApiResponse> {
        check_entries(channel, body)?;
        let path = join_path(PATH_DATA, channel);
        debug!("Publishing to {}", path);
        self.execute(true, Method::PUT, &path, &[], &[], Body::from(body))
            .await
    }

    async fn publish(
        &self,
        channel: Option<&str>,
        entry: &PublishRequest,
    ) -> CpResult<ApiResponse> {
        entry.validate()?;
        let body = serde_json::to_value(entry)?;
        self.publish_data(channel, &body).await
    }

    async fn retrieve_data(
        &self,
        channel_mask: &str,
        filter: &DataFilter,
    ) -> CpResult<ApiResponse> {
        require_mask(channel_mask)?;
        let path = join_path(PATH_DATA, Some(channel_mask));
        self.execute(true, Method::GET, &path, &[], &filter.to_query(), Body::Empty)
            .await
    }

    async fn remove_data(&self, channel_mask: &str, body: &Value) -> CpResult<ApiResponse> {
        require_mask(channel_mask)?;
        if is_blank_value(body) {
            return Err(AppError::InvalidParameter(
                "a data selection is required".to_string(),
            ));
        }
        let path = join_path(PATH_DATA, Some(channel_mask));
        debug!("Removing data from {}", path);
        self.execute(true, Method::DELETE, &path, &[], &[], Body::from(body))
            .await
    }

    async fn remove_data_ex(
        &self,
        channel_mask: &str,
        request: &RemoveDataRequest,
    ) -> CpResult<ApiResponse> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        self.remove_data(channel_mask, &body).await
    }

    async fn get_channel(
        &self,
        channel_mask: Option<&str>,
        query: Option<&DataFilter>,
    ) -> CpResult<ApiResponse> {
        let path = join_path(PATH_CHANNEL, channel_mask);
        let query = query.map(DataFilter::to_query).unwrap_or_default();
        self.execute(true, Method::GET, &path, &[], &query, Body::Empty)
            .await
    }

    async fn get_channel_ex(
        &self,
        channel_mask: &str,
        filter: &DataFilter,
    ) -> CpResult<ApiResponse> {
        require_mask(channel_mask)?;
        let path = join_path(PATH_CHANNEL, Some(channel_mask));
        let body = if filter.is_empty() {
            Body::Empty
        } else {
            Body::json(filter)?
        };
        self.execute(true, Method::GET, &path, &[], &[], body)
            .await
    }
}
