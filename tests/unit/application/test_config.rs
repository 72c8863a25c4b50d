use cloudplugs_client::application::client::Session;
use cloudplugs_client::application::config::{Config, Credentials, RestApiConfig};
use cloudplugs_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_rest_api_defaults() {
    let rest_api = RestApiConfig::default();
    assert_eq!(rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert!(!rest_api.verify_tls);
}

#[test]
fn test_credentials_pair() {
    let mut credentials = Credentials {
        plug_id: Some("dev-1".to_string()),
        password: None,
        master: false,
    };
    assert_eq!(credentials.pair(), None);

    credentials.password = Some(String::new());
    assert_eq!(credentials.pair(), None);

    credentials.password = Some("secret".to_string());
    assert_eq!(credentials.pair(), Some(("dev-1", "secret")));
}

#[test]
fn test_password_is_not_serialized() {
    let config = Config {
        credentials: Credentials {
            plug_id: Some("dev-1".to_string()),
            password: Some("secret".to_string()),
            master: false,
        },
        rest_api: RestApiConfig::default(),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("dev-1"));
    assert!(!json.contains("secret"));
}

#[test]
fn test_session_from_config() {
    let config = Config {
        credentials: Credentials {
            plug_id: Some("owner@example.com".to_string()),
            password: Some("secret".to_string()),
            master: true,
        },
        rest_api: RestApiConfig {
            base_url: "http://localhost:8080/iot".to_string(),
            timeout: 5,
            verify_tls: true,
        },
    };
    let session = Session::from_config(&config).unwrap();
    assert_eq!(session.get_base_url(), "http://localhost:8080/iot/");
    assert_eq!(session.get_timeout(), 5);
    assert!(session.verify_tls());
    assert!(session.is_auth_master());
    assert_eq!(session.get_auth_id().unwrap(), "owner@example.com");
}

#[test]
fn test_session_from_config_without_credentials() {
    let session = Session::from_config(&Config::default()).unwrap();
    assert!(session.auth().is_none());
    assert_eq!(session.get_base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_session_from_config_rejects_bad_url() {
    let mut config = Config::default();
    config.rest_api.base_url = "ftp://example.com".to_string();
    assert!(Session::from_config(&config).is_err());
}
