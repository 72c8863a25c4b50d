/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{MAX_REDIRECTS, USER_AGENT};
use crate::error::{AppError, CpResult};
use crate::model::responses::{ApiResponse, is_success_status};
use reqwest::redirect::Policy;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Builds the HTTP client used by a session
///
/// Redirects are followed up to [`MAX_REDIRECTS`] hops. When `verify_tls` is false the
/// server certificate is not checked.
pub fn build_http_client(verify_tls: bool) -> CpResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .danger_accept_invalid_certs(!verify_tls)
        .build()
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Sends one HTTP request and maps the outcome
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string pairs, appended only when not empty
/// * `body` - Encoded request body
/// * `timeout` - Timeout of the whole exchange
///
/// # Returns
///
/// * `Ok(ApiResponse)` - The server answered 200 or 201
/// * `Err(AppError::Http)` - The server answered any other status; the body is kept
/// * `Err(AppError::Transport)` - No response was received
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: &[(String, String)],
    query: &[(String, String)],
    body: String,
    timeout: Duration,
) -> CpResult<ApiResponse> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url).timeout(timeout);

    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    let response = match request.body(body).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request to {} failed: {}", url, e);
            return Err(AppError::Transport(e.to_string()));
        }
    };

    let status = response.status().as_u16();
    debug!("Response status: {}", status);

    let response_headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from {}: {}", url, e);
            return Err(AppError::Transport(e.to_string()));
        }
    };

    if is_success_status(status) {
        Ok(ApiResponse::new(status, response_headers, text))
    } else {
        warn!("Request failed with status {}: {}", status, text);
        Err(AppError::Http { status, body: text })
    }
}
