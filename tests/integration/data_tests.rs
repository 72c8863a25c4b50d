use crate::common::create_test_session;
use cloudplugs_client::prelude::*;
use serde_json::json;

#[tokio::test]
#[ignore]
async fn test_publish_and_retrieve() {
    let session = create_test_session();

    let entry = PublishRequest::new(json!(21.5)).unwrap().with_at_now();
    let published = session.publish(Some("integration/temperature"), &entry).await;
    assert!(published.is_ok(), "publish failed: {:?}", published.err());

    let filter = DataFilter::new().with_limit(1);
    let response = session
        .retrieve_data("integration/temperature", &filter)
        .await
        .expect("retrieve failed");
    info!("Retrieved: {}", response.body());

    let entries: Vec<serde_json::Value> = response.json().expect("invalid json");
    assert!(!entries.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_list_channels() {
    let session = create_test_session();
    let response = session
        .get_channel(None, Some(&DataFilter::new().with_limit(10)))
        .await
        .expect("get_channel failed");
    info!("Channels: {}", response.body());
}
