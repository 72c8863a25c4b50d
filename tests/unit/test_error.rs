use cloudplugs_client::error::{AppError, ErrorCode};

#[test]
fn test_error_code_values() {
    assert_eq!(ErrorCode::InternalError.value(), 1);
    assert_eq!(ErrorCode::InvalidParameter.value(), 7);
    assert_eq!(ErrorCode::InvalidLogin.value(), 8);
    assert_eq!(ErrorCode::Http.value(), 11);
}

#[test]
fn test_error_code_messages() {
    assert_eq!(ErrorCode::InternalError.message(), "Internal Library Error");
    assert_eq!(ErrorCode::QueryInvalidType.message(), "Query contain invalid type");
    assert_eq!(ErrorCode::HeadersMustBeString.message(), "Header value must be a string");
    assert_eq!(ErrorCode::InvalidLogin.message(), "Invalid login");
    assert_eq!(ErrorCode::JsonEncode.message(), "JSON encode error");
    assert_eq!(ErrorCode::Http.to_string(), "HTTP error");
}

#[test]
fn test_error_code_from_value() {
    assert_eq!(ErrorCode::from_value(9), Some(ErrorCode::JsonParse));
    assert_eq!(ErrorCode::from_value(42), None);
}

#[test]
fn test_app_error_display_invalid_parameter() {
    let error = AppError::InvalidParameter("plug id is required".to_string());
    assert_eq!(error.to_string(), "invalid parameter: plug id is required");
}

#[test]
fn test_app_error_display_http() {
    let error = AppError::Http {
        status: 404,
        body: "not here".to_string(),
    };
    assert_eq!(error.to_string(), "http error 404: not here");
}

#[test]
fn test_app_error_codes() {
    assert_eq!(
        AppError::InvalidParameter(String::new()).code(),
        ErrorCode::InvalidParameter
    );
    assert_eq!(AppError::InvalidLogin(String::new()).code(), ErrorCode::InvalidLogin);
    assert_eq!(AppError::Transport(String::new()).code(), ErrorCode::Http);
    assert_eq!(AppError::JsonParse(String::new()).code(), ErrorCode::JsonParse);
    assert_eq!(AppError::Internal(String::new()).code(), ErrorCode::InternalError);
}

#[test]
fn test_app_error_from_serde_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert_eq!(error.code(), ErrorCode::JsonEncode);
    assert_eq!(error.code_message(), "JSON encode error");
}

#[test]
fn test_app_error_http_status_and_payload() {
    let http = AppError::Http {
        status: 401,
        body: "{\"err\":\"auth\"}".to_string(),
    };
    assert_eq!(http.http_status(), 401);
    assert_eq!(http.payload(), Some("{\"err\":\"auth\"}"));

    let transport = AppError::Transport("connection refused".to_string());
    assert_eq!(transport.http_status(), 0);
    assert_eq!(transport.payload(), Some("connection refused"));

    let login = AppError::InvalidLogin("no auth".to_string());
    assert_eq!(login.http_status(), 0);
    assert_eq!(login.payload(), None);
}
