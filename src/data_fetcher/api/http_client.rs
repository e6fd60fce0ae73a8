//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::constants::headers;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Creates a pooled HTTP client with the given timeout whose every request
/// carries `default_headers`.
pub fn create_http_client_with_headers(
    timeout_seconds: u64,
    default_headers: HeaderMap,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(default_headers)
        .build()
}

/// Creates the client used for the football data service.
///
/// The host and key headers are attached as default headers so every
/// request built from this client carries them.
pub fn create_api_client(config: &Config) -> Result<Client, AppError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        HeaderName::from_static(headers::API_HOST),
        header_value("API host", &config.api_host)?,
    );
    let mut key = header_value("API key", &config.api_key)?;
    key.set_sensitive(true);
    default_headers.insert(HeaderName::from_static(headers::API_KEY), key);

    Ok(create_http_client_with_headers(
        config.http_timeout_seconds,
        default_headers,
    )?)
}

fn header_value(label: &str, value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value.trim())
        .map_err(|e| AppError::config_error(format!("{label} is not a valid header value: {e}")))
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_headers(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS, HeaderMap::new())
        .expect("Failed to create test HTTP client")
}
