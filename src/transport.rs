//! The HTTP transport behind task execution.
//!
//! Builds a `reqwest` client from the task's transport options, encodes
//! the request per method semantics, applies headers and authentication,
//! performs the single exchange, and maps failures into [`TaskError`].

use crate::auth::AuthScheme;
use crate::connection::Connection;
use crate::error::TaskError;
use crate::options::ExtraOptions;
use crate::response::HttpResponse;
use reqwest::{Client, Method};
use std::collections::HashMap;
use tracing::debug;

/// Performs one HTTP exchange for a task.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    options: ExtraOptions,
}

impl HttpTransport {
    /// Creates a transport with the given options.
    #[must_use]
    pub fn new(options: ExtraOptions) -> Self {
        Self { options }
    }

    /// Sends one request against the resolved connection.
    ///
    /// GET and HEAD encode the body as query parameters; every other
    /// method sends it as the payload. Task headers override same-named
    /// connection defaults. When `ensure_success` is set (the default) a
    /// non-2xx response is an error carrying the status and body.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid configuration, connection or DNS
    /// failure, client-side timeout, or a non-2xx status.
    pub async fn send(
        &self,
        method: &str,
        connection: &Connection,
        endpoint: Option<&str>,
        headers: &HashMap<String, String>,
        body: Option<&serde_json::Value>,
        auth: AuthScheme,
    ) -> Result<HttpResponse, TaskError> {
        let method = parse_method(method)?;
        let url = join_url(&connection.base_url, endpoint);
        let client = self.build_client()?;

        debug!(%method, %url, "sending request");

        let mut builder = client.request(method.clone(), &url);

        for (name, value) in merge_headers(&connection.default_headers, headers) {
            builder = builder.header(name, value);
        }

        if matches!(method, Method::GET | Method::HEAD) {
            if let Some(body) = body {
                builder = builder.query(&query_pairs(body)?);
            }
        } else if let Some(body) = body {
            builder = match body {
                serde_json::Value::String(text) => builder.body(text.clone()),
                other => builder.json(other),
            };
        }

        builder = auth.apply(builder, connection.credentials.as_ref());

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TaskError::timeout(self.options.timeout)
            } else {
                TaskError::transport(e.to_string())
            }
        })?;

        let response = HttpResponse::capture(response).await?;

        if self.options.ensure_success && !response.is_success() {
            return Err(TaskError::http_status(response.status, response.body));
        }

        Ok(response)
    }

    fn build_client(&self) -> Result<Client, TaskError> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!self.options.verify_tls);

        if let Some(timeout) = self.options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if !self.options.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        if let Some(proxy) = &self.options.proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| {
                TaskError::invalid_config("proxy", format!("'{}' is not a valid proxy URL: {}", proxy, e))
            })?;
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|e| TaskError::transport(format!("failed to create HTTP client: {}", e)))
    }
}

/// Parses an HTTP method name, case-insensitively.
pub(crate) fn parse_method(method: &str) -> Result<Method, TaskError> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        "PATCH" => Ok(Method::PATCH),
        "HEAD" => Ok(Method::HEAD),
        "OPTIONS" => Ok(Method::OPTIONS),
        _ => Err(TaskError::invalid_config(
            "method",
            format!("unsupported HTTP method '{}'", method),
        )),
    }
}

/// Joins a base URL and an optional endpoint path.
///
/// Without an endpoint the base URL is used byte-for-byte. With one,
/// base and endpoint are glued with a single `/`; this is plain
/// concatenation, not RFC 3986 resolution, so a base path like
/// `https://host/api` keeps its trailing segment.
pub(crate) fn join_url(base_url: &str, endpoint: Option<&str>) -> String {
    match endpoint {
        None => base_url.to_string(),
        Some("") => base_url.to_string(),
        Some(endpoint) => format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ),
    }
}

/// Flattens a JSON object into query pairs.
///
/// String values are used verbatim, `null` values are skipped, and
/// everything else is rendered in compact JSON form.
pub(crate) fn query_pairs(body: &serde_json::Value) -> Result<Vec<(String, String)>, TaskError> {
    let serde_json::Value::Object(map) = body else {
        return Err(TaskError::invalid_config(
            "body",
            "GET/HEAD bodies must be JSON objects to encode as query parameters",
        ));
    };

    Ok(map
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect())
}

/// Merges connection default headers with task headers.
///
/// Task headers win on name collision; non-colliding defaults are kept.
pub(crate) fn merge_headers(
    defaults: &HashMap<String, String>,
    task_headers: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = defaults.clone();
    merged.extend(
        task_headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
    merged
}
