//! API utilities for frontend-backend communication
//!
//! URL construction and decoding of the `{success, ...}` responses.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Сервер ответил `success: false`; текст показывается пользователю как есть
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Build a full API URL from the configured base path and an endpoint path
///
/// # Example
/// ```text
/// let url = api_url("/form/api", "/cities"); // "/form/api/cities"
/// ```
pub fn api_url(base_path: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_path.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Append a single query parameter, escaping the value
pub fn with_query(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, key, urlencoding::encode(value))
}

/// Decode a response body.
///
/// The server answers 4xx/5xx with the same JSON shape as 2xx, so the body is
/// decoded regardless of status; only an undecodable non-2xx body becomes
/// [`ApiError::Status`].
pub fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Read and decode a `gloo_net` response
pub async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await?;
    decode_body(ok, status, &body)
}
