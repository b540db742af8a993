//! The HTTP task descriptor and its execute operation.
//!
//! A task is one unit of work run once per scheduled run by an external
//! orchestrator: it resolves its named connection, performs one HTTP
//! exchange, optionally validates and transforms the response, and
//! returns the result to the scheduler.

use crate::auth::AuthScheme;
use crate::connection::ConnectionRegistry;
use crate::context::ExecutionContext;
use crate::error::TaskError;
use crate::options::ExtraOptions;
use crate::response::HttpResponse;
use crate::transport::HttpTransport;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Predicate gating whether the task is considered successful.
pub type ResponseCheck = Arc<dyn Fn(&HttpResponse, &ExecutionContext) -> bool + Send + Sync>;

/// Transform producing the task's final result from the response.
pub type ResponseFilter =
    Arc<dyn Fn(&HttpResponse, &ExecutionContext) -> Result<serde_json::Value, String> + Send + Sync>;

/// A single-shot HTTP task.
///
/// Immutable after construction; `execute` is invoked at most once per
/// scheduled run and the task holds no state afterward.
///
/// # Example
///
/// ```no_run
/// use http_task::prelude::*;
///
/// # async fn run(registry: StaticConnectionRegistry) -> Result<(), TaskError> {
/// let task = HttpTask::new("billing_api")
///     .with_method("GET")
///     .with_endpoint("invoices/latest")
///     .with_response_filter(|response, _context| {
///         response.json().map_err(|e| e.to_string())
///     });
///
/// let result = task.execute(&registry, &ExecutionContext::new()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpTask {
    connection_id: String,
    method: String,
    endpoint: Option<String>,
    headers: HashMap<String, String>,
    body: Option<serde_json::Value>,
    extra_options: ExtraOptions,
    log_response: bool,
    auth_scheme: AuthScheme,
    response_check: Option<ResponseCheck>,
    response_filter: Option<ResponseFilter>,
}

impl HttpTask {
    /// Creates a task against the given connection id.
    ///
    /// Defaults: method `POST`, no endpoint, no headers, no body,
    /// default transport options, response logging off, basic auth.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            method: "POST".to_string(),
            endpoint: None,
            headers: HashMap::new(),
            body: None,
            extra_options: ExtraOptions::default(),
            log_response: false,
            auth_scheme: AuthScheme::default(),
            response_check: None,
            response_filter: None,
        }
    }

    /// Sets the HTTP method.
    ///
    /// The method is validated at execution time; unknown verbs fail
    /// with a configuration error.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the endpoint path appended to the connection's base URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Adds a task-level header. Overrides a same-named connection
    /// default header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    ///
    /// Encoded as query parameters for GET/HEAD and as the payload for
    /// every other method.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the transport options.
    #[must_use]
    pub fn with_extra_options(mut self, extra_options: ExtraOptions) -> Self {
        self.extra_options = extra_options;
        self
    }

    /// Logs the raw response body at info level.
    #[must_use]
    pub fn with_response_logging(mut self) -> Self {
        self.log_response = true;
        self
    }

    /// Sets the credential-encoding scheme.
    #[must_use]
    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    /// Sets the response check.
    ///
    /// Invoked with the response and the execution context; returning
    /// false fails the task without invoking the filter.
    #[must_use]
    pub fn with_response_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&HttpResponse, &ExecutionContext) -> bool + Send + Sync + 'static,
    {
        self.response_check = Some(Arc::new(check));
        self
    }

    /// Sets the response filter.
    ///
    /// Invoked with the response and the execution context; its `Ok`
    /// value becomes the task's result.
    #[must_use]
    pub fn with_response_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&HttpResponse, &ExecutionContext) -> Result<serde_json::Value, String>
            + Send
            + Sync
            + 'static,
    {
        self.response_filter = Some(Arc::new(filter));
        self
    }

    /// Returns the connection id this task resolves.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// Returns the configured HTTP method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Executes the task once.
    ///
    /// Resolves the connection, performs the exchange, then runs the
    /// response pipeline: optional logging, optional check, optional
    /// filter. Without a filter the result is the raw response body as
    /// text.
    ///
    /// # Errors
    ///
    /// Propagates every failure unmodified: connection resolution,
    /// invalid configuration, transport failure or timeout, non-2xx
    /// status, failed check, failed filter. Retry policy belongs to the
    /// caller.
    pub async fn execute(
        &self,
        registry: &dyn ConnectionRegistry,
        context: &ExecutionContext,
    ) -> Result<serde_json::Value, TaskError> {
        let connection = registry.resolve(&self.connection_id).await?;

        info!(
            connection_id = %self.connection_id,
            method = %self.method,
            "calling HTTP endpoint"
        );

        let transport = HttpTransport::new(self.extra_options.clone());
        let response = transport
            .send(
                &self.method,
                &connection,
                self.endpoint.as_deref(),
                &self.headers,
                self.body.as_ref(),
                self.auth_scheme,
            )
            .await?;

        self.process_response(response, context)
    }

    /// Runs the post-exchange pipeline: log, check, filter.
    fn process_response(
        &self,
        response: HttpResponse,
        context: &ExecutionContext,
    ) -> Result<serde_json::Value, TaskError> {
        if self.log_response {
            info!(body = %response.body, "task response");
        }

        if let Some(check) = &self.response_check {
            if !check(&response, context) {
                return Err(TaskError::response_validation());
            }
        }

        if let Some(filter) = &self.response_filter {
            return filter(&response, context).map_err(TaskError::response_filter);
        }

        Ok(serde_json::Value::String(response.body))
    }
}

impl fmt::Debug for HttpTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTask")
            .field("connection_id", &self.connection_id)
            .field("method", &self.method)
            .field("endpoint", &self.endpoint)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("extra_options", &self.extra_options)
            .field("log_response", &self.log_response)
            .field("auth_scheme", &self.auth_scheme)
            .field("response_check", &self.response_check.as_ref().map(|_| "<fn>"))
            .field("response_filter", &self.response_filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
