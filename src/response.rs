//! Captured HTTP responses.
//!
//! The transport reads the full response before checks and filters run,
//! so callables operate on plain data rather than a live body stream.

use crate::error::TaskError;
use std::collections::HashMap;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers; values that are not valid UTF-8 are dropped
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Captures a `reqwest` response by reading its full body.
    ///
    /// # Errors
    ///
    /// Returns a transport error if reading the body fails mid-transfer.
    pub async fn capture(response: reqwest::Response) -> Result<Self, TaskError> {
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TaskError::transport(format!("failed to read response body: {}", e)))?;

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a response filter error when the body is not valid JSON,
    /// since this helper exists for use inside filters.
    pub fn json(&self) -> Result<serde_json::Value, TaskError> {
        serde_json::from_str(&self.body)
            .map_err(|e| TaskError::response_filter(format!("body is not valid JSON: {}", e)))
    }
}
