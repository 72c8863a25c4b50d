// Common utilities for integration tests

use cloudplugs_client::prelude::*;

/// Creates a session authenticated with the credentials found in the environment
pub fn create_test_session() -> Session {
    setup_logger();
    let config = Config::new();
    info!("Using CloudPlugs API at {}", config.rest_api.base_url);
    Session::from_config(&config).expect("Failed to create session")
}
