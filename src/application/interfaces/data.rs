use crate::error::CpResult;
use crate::model::requests::{DataFilter, PublishRequest, RemoveDataRequest};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the data and channel endpoints
#[async_trait]
pub trait DataService: Send + Sync {
    /// Publishes data from a raw JSON body
    ///
    /// # Arguments
    /// * `channel` - Channel to publish to; when `None` every entry must carry its own
    ///   `channel` field
    /// * `body` - An entry object or an array of entries
    async fn publish_data(&self, channel: Option<&str>, body: &Value) -> CpResult<ApiResponse>;

    /// Publishes a single entry
    async fn publish(&self, channel: Option<&str>, entry: &PublishRequest)
    -> CpResult<ApiResponse>;

    /// Retrieves published data matching a channel mask
    async fn retrieve_data(&self, channel_mask: &str, filter: &DataFilter)
    -> CpResult<ApiResponse>;

    /// Removes published data from a raw JSON selection
    async fn remove_data(&self, channel_mask: &str, body: &Value) -> CpResult<ApiResponse>;

    /// Removes published data
    async fn remove_data_ex(
        &self,
        channel_mask: &str,
        request: &RemoveDataRequest,
    ) -> CpResult<ApiResponse>;

    /// Lists the channels with published data, filter sent as query string
    async fn get_channel(
        &self,
        channel_mask: Option<&str>,
        query: Option<&DataFilter>,
    ) -> CpResult<ApiResponse>;

    /// Lists the channels matching a mask, filter sent as JSON body
    async fn get_channel_ex(&self, channel_mask: &str, filter: &DataFilter)
    -> CpResult<ApiResponse>;
}
