use assert_json_diff::assert_json_eq;
use cloudplugs_client::error::ErrorCode;
use cloudplugs_client::model::requests::{
    ControlDeviceRequest, DataFilter, DeviceUpdate, EnrollProductRequest,
    EnrollPrototypeRequest, LocationUpdate, PublishRequest, RemoveDataRequest,
};
use serde_json::json;

#[test]
fn test_data_filter_only_truthy_fields() {
    let filter = DataFilter::new()
        .with_before("1400000000000")
        .with_of("")
        .with_offset(0)
        .with_limit(10);

    assert_eq!(
        filter.to_query(),
        vec![
            ("before".to_string(), "1400000000000".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]
    );
    assert_json_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({"before": "1400000000000", "limit": 10})
    );
}

#[test]
fn test_data_filter_empty() {
    assert!(DataFilter::new().is_empty());
    assert!(DataFilter::new().with_at("").with_offset(0).is_empty());
    assert!(!DataFilter::new().with_at("1,2").is_empty());
}

#[test]
fn test_remove_data_requires_a_selector() {
    let err = RemoveDataRequest::default().validate().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidParameter);

    assert!(RemoveDataRequest::by_id("").is_err());
    let request = RemoveDataRequest::after("1400000000000").unwrap().with_of("dev-1");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"after": "1400000000000", "of": "dev-1"})
    );
}

#[test]
fn test_publish_request_serialization() {
    let request = PublishRequest::new(json!(21.5))
        .unwrap()
        .with_channel("temperature")
        .with_at(1_400_000_000_000)
        .with_ttl(3600);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "channel": "temperature",
            "data": 21.5,
            "at": 1_400_000_000_000_i64,
            "ttl": 3600
        })
    );
}

#[test]
fn test_publish_request_rejects_null_data() {
    let err = PublishRequest::new(serde_json::Value::Null).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidParameter);
}

#[test]
fn test_publish_request_at_now() {
    let request = PublishRequest::new(json!(1)).unwrap().with_at_now();
    assert!(request.at.unwrap() > 1_600_000_000_000);
}

#[test]
fn test_enroll_prototype_requires_hwid_or_name() {
    assert!(EnrollPrototypeRequest::new(None, None).is_err());
    assert!(EnrollPrototypeRequest::new(Some(""), Some("")).is_err());
    assert!(EnrollPrototypeRequest::new(None, Some("sensor")).is_ok());

    let request = EnrollPrototypeRequest::new(Some("abc"), None)
        .unwrap()
        .with_pass("secret")
        .with_props(json!({"color": "red"}));
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"hwid": "abc", "pass": "secret", "props": {"color": "red"}})
    );
}

#[test]
fn test_enroll_prototype_random_hwid() {
    let request = EnrollPrototypeRequest::with_random_hwid("sensor").unwrap();
    assert_eq!(request.hwid.as_deref().map(str::len), Some(24));
    assert_eq!(request.name.as_deref(), Some("sensor"));
}

#[test]
fn test_enroll_product_mandatory_fields() {
    assert!(EnrollProductRequest::new("", "hw", "pass").is_err());
    assert!(EnrollProductRequest::new("mod-1", "", "pass").is_err());
    assert!(EnrollProductRequest::new("mod-1", "hw", "").is_err());

    let request = EnrollProductRequest::new("mod-1", "hw", "pass").unwrap();
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"model": "mod-1", "hwid": "hw", "pass": "pass"})
    );
}

#[test]
fn test_control_device_request() {
    assert!(ControlDeviceRequest::new("mod-1", "", "pass").is_err());

    let request = ControlDeviceRequest::new("mod-1", "serial", "pass")
        .unwrap()
        .with_name("controller")
        .with_hwid("");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"model": "mod-1", "ctrl": "serial", "pass": "pass", "name": "controller"})
    );
}

#[test]
fn test_device_update_rejects_empty_update() {
    assert!(DeviceUpdate::new().validate().is_err());
    assert!(DeviceUpdate::new().with_name("").validate().is_err());
    assert!(DeviceUpdate::new().with_status("disabled").validate().is_ok());
}

#[test]
fn test_location_bounds() {
    assert!(LocationUpdate::new(180.0, 90.0).is_ok());
    assert!(LocationUpdate::new(-180.0, -90.0).is_ok());

    let err = LocationUpdate::new(180.5, 0.0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidParameter);
    assert!(LocationUpdate::new(0.0, -90.1).is_err());
    assert!(LocationUpdate::new(f64::NAN, 0.0).is_err());
}

#[test]
fn test_location_negative_optionals_are_dropped() {
    let location = LocationUpdate::new(12.5, 41.9)
        .unwrap()
        .with_accuracy(-1.0)
        .with_altitude(35.0)
        .with_timestamp(1_400_000_000_000.0);

    assert_eq!(location.r, None);
    assert_json_eq!(
        serde_json::to_value(&location).unwrap(),
        json!({"x": 12.5, "y": 41.9, "z": 35.0, "t": 1_400_000_000_000.0})
    );
}

#[test]
fn test_location_validate_rejects_negative_fields_set_directly() {
    let mut location = LocationUpdate::new(0.0, 0.0).unwrap();
    location.z = Some(-3.0);
    assert!(location.validate().is_err());
}
