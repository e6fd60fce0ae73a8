//! Shared GET-and-unwrap helper for the football data service

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::data_fetcher::models::ApiEnvelope;
use crate::error::AppError;

/// Fetches `url`, checks the HTTP status, parses the `{ response, errors }`
/// envelope and returns its `response` payload.
///
/// There is no retry and no caching: a failed call surfaces immediately.
///
/// # Errors
/// * transport errors (`ApiNotFound`, `ApiClientError`, `ApiServerError`, ...)
///   when the status is not successful or the request never completed
/// * `ApiUpstream` when the envelope carries a non-empty `errors` field
/// * `ApiNoData` / `ApiMalformedJson` / `ApiUnexpectedStructure` for bad bodies
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    let envelope = parse_envelope::<T>(&response_text, url)?;

    if envelope.has_errors() {
        let summary = envelope.errors_summary();
        warn!("API errors for {}: {}", url, summary);
        return Err(AppError::api_upstream(summary, url));
    }

    Ok(envelope.response)
}

fn parse_envelope<T: DeserializeOwned>(body: &str, url: &str) -> Result<ApiEnvelope<T>, AppError> {
    serde_json::from_str::<ApiEnvelope<T>>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );

        let trimmed = body.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
