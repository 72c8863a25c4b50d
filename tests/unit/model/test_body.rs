use cloudplugs_client::model::body::Body;
use serde_json::{Value, json};

#[test]
fn test_encode_object() {
    let body = Body::from(json!({"data": 42}));
    assert_eq!(body.encode(), "{\"data\":42}");
}

#[test]
fn test_encode_array() {
    let body = Body::from(json!(["dev-1", "dev-2"]));
    assert_eq!(body.encode(), "[\"dev-1\",\"dev-2\"]");
}

#[test]
fn test_encode_integer() {
    assert_eq!(Body::from(42_i64).encode(), "42");
    assert_eq!(Body::Integer(-7).encode(), "-7");
}

#[test]
fn test_encode_absent_and_empty() {
    assert_eq!(Body::Empty.encode(), "");
    assert_eq!(Body::from(Value::Null).encode(), "");
    assert_eq!(Body::from("").encode(), "");
    assert_eq!(Body::from(None::<Value>).encode(), "");
}

#[test]
fn test_encode_text_is_verbatim() {
    assert_eq!(Body::from("raw text").encode(), "raw text");
    assert_eq!(Body::from("7".to_string()).encode(), "7");
}

#[test]
fn test_json_string_stays_quoted() {
    let body = Body::from(json!("dev-1"));
    assert_eq!(body.encode(), "\"dev-1\"");
}

#[test]
fn test_body_json_from_serializable() {
    #[derive(serde::Serialize)]
    struct Reading {
        data: u32,
    }
    let body = Body::json(&Reading { data: 55 }).unwrap();
    assert_eq!(body, Body::Json(json!({"data": 55})));
}

#[test]
fn test_is_blank() {
    assert!(Body::Empty.is_blank());
    assert!(Body::from(json!({})).is_blank());
    assert!(Body::from(json!([])).is_blank());
    assert!(!Body::from(json!({"a": 1})).is_blank());
    assert!(!Body::Integer(0).is_blank());
}

#[test]
fn test_empty_json_string_encodes_as_empty_body() {
    let body = Body::from(json!(""));
    assert_eq!(body, Body::Empty);
    assert!(body.is_blank());
    assert_eq!(body.encode(), "");

    let raw = Body::Json(json!(""));
    assert!(raw.is_blank());
    assert_eq!(raw.encode(), "");
}
