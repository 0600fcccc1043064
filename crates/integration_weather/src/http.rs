//! Shared request plumbing for the Open-Meteo clients

use reqwest::{RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use domain::FetchError;

/// Error body Open-Meteo sends alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    reason: Option<String>,
}

/// Send one request and decode its JSON body
///
/// Transport failures and body read failures become `NetworkUnavailable`,
/// non-success statuses `ProviderError`, and undecodable bodies
/// `InvalidResponse`.
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::NetworkUnavailable(format!("request timed out: {e}"))
        } else {
            FetchError::NetworkUnavailable(e.to_string())
        }
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::NetworkUnavailable(format!("failed to read body: {e}")))?;

    if !status.is_success() {
        return Err(provider_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| FetchError::InvalidResponse(e.to_string()))
}

fn provider_error(status: StatusCode, body: &str) -> FetchError {
    let reason = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|b| b.reason)
        .or_else(|| status.canonical_reason().map(str::to_string));

    debug!(status = %status, reason = ?reason, "Provider rejected request");

    FetchError::ProviderError {
        status: status.as_u16(),
        reason,
    }
}
