//! Backend client for the insights endpoint.
//!
//! This module wraps reqwest to issue exactly one request per submission.
//! reqwest works on both native and WASM platforms:
//! - Native: uses hyper
//! - WASM: uses the browser fetch() API internally
//!
//! Failure statuses are normalized into a human-readable message before they
//! reach the status line: the JSON body's `error` field when present,
//! otherwise a templated fallback naming the status code.

use once_cell::sync::Lazy;
use repodeck_core::api::{InsightsRequest, InsightsResponse, Query};

use crate::error::ClientError;

/// Backend base URL, overridable at build time via `REPODECK_API_BASE`.
const DEFAULT_API_BASE: &str = "http://localhost:5000";

pub fn api_base() -> &'static str {
    option_env!("REPODECK_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Global HTTP client for connection reuse across submissions.
///
/// reqwest::Client pools connections internally, so a single shared client
/// beats building one per submission. No request timeout is configured: the
/// submit control is locked while a request is in flight, and the wasm fetch
/// backend has no timeout support anyway.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("repodeck/0.1.0 (repo insights UI)")
        .build()
        .expect("Failed to build HTTP client")
});

/// Submit one query and decode the response.
pub async fn fetch_insights(query: &Query) -> Result<InsightsResponse, ClientError> {
    let url = format!("{}/api/insights", api_base());
    let request = InsightsRequest::from(query);

    let response = HTTP_CLIENT.post(&url).json(&request).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Backend(error_message(status.as_u16(), &body)));
    }

    response
        .json::<InsightsResponse>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Derive the user-facing message for a failure status.
pub fn error_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| format!("Request failed: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(500, r#"{"error":"rate limited"}"#),
            "rate limited"
        );
        assert_eq!(
            error_message(404, r#"{"error":"Repo not found"}"#),
            "Repo not found"
        );
    }

    #[test]
    fn test_error_message_fallback_on_unparseable_body() {
        assert_eq!(error_message(500, "<html>oops</html>"), "Request failed: 500");
        assert_eq!(error_message(502, ""), "Request failed: 502");
    }

    #[test]
    fn test_error_message_fallback_on_missing_field() {
        assert_eq!(
            error_message(404, r#"{"message":"nope"}"#),
            "Request failed: 404"
        );
        assert_eq!(error_message(400, r#"{"error":null}"#), "Request failed: 400");
    }

    #[test]
    fn test_api_base_default() {
        assert!(api_base().starts_with("http"));
    }
}
