use cloudplugs_client::error::ErrorCode;
use cloudplugs_client::model::responses::{
    ApiResponse, HTTP_CREATED, HTTP_OK, http_result_string, is_success_status,
};
use serde::Deserialize;

#[test]
fn test_http_result_strings() {
    assert_eq!(http_result_string(200), Some("Ok"));
    assert_eq!(http_result_string(201), Some("Created"));
    assert_eq!(http_result_string(207), Some("Multi-Status"));
    assert_eq!(http_result_string(404), Some("Not found"));
    assert_eq!(http_result_string(503), Some("Service Unavailable"));
    assert_eq!(http_result_string(0), None);
    assert_eq!(http_result_string(418), None);
}

#[test]
fn test_success_statuses() {
    assert!(is_success_status(HTTP_OK));
    assert!(is_success_status(HTTP_CREATED));
    assert!(!is_success_status(204));
    assert!(!is_success_status(207));
}

#[test]
fn test_api_response_accessors() {
    let response = ApiResponse::new(
        201,
        vec![("Content-Type".to_string(), "application/json".to_string())],
        "{\"id\":\"abc\"}".to_string(),
    );
    assert!(response.is_created());
    assert_eq!(response.status_text(), Some("Created"));
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.header("x-missing"), None);
}

#[test]
fn test_api_response_json() {
    #[derive(Deserialize)]
    struct Created {
        id: String,
    }
    let response = ApiResponse::new(201, Vec::new(), "{\"id\":\"abc\"}".to_string());
    let created: Created = response.json().unwrap();
    assert_eq!(created.id, "abc");
}

#[test]
fn test_api_response_json_parse_error() {
    let response = ApiResponse::new(200, Vec::new(), "not json".to_string());
    let err = response.json::<serde_json::Value>().unwrap_err();
    assert_eq!(err.code(), ErrorCode::JsonParse);
}
