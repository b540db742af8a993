//! Transport-level request options.
//!
//! Knobs passed through to the HTTP client: timeouts, TLS verification,
//! proxying, and redirect policy. These shape the single outbound call;
//! retry policy stays with the host scheduler.

use std::time::Duration;

/// Transport options for one task execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraOptions {
    /// Total request timeout; no client-side timeout when unset
    pub timeout: Option<Duration>,
    /// Timeout for establishing the connection
    pub connect_timeout: Option<Duration>,
    /// Whether to verify TLS certificates
    pub verify_tls: bool,
    /// Proxy URL for the request
    pub proxy: Option<String>,
    /// Whether to follow redirects
    pub follow_redirects: bool,
    /// Whether a non-2xx status fails the task. When false the response
    /// flows on to the check/filter stage unchanged.
    pub ensure_success: bool,
}

impl ExtraOptions {
    /// Creates options with the defaults: no timeouts, TLS verification
    /// on, no proxy, redirects followed, non-2xx statuses fail the task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Disables TLS certificate verification.
    #[must_use]
    pub fn without_tls_verification(mut self) -> Self {
        self.verify_tls = false;
        self
    }

    /// Routes the request through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Disables redirect following.
    #[must_use]
    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }

    /// Lets non-2xx responses through to the check/filter stage instead
    /// of failing the task.
    #[must_use]
    pub fn accept_error_status(mut self) -> Self {
        self.ensure_success = false;
        self
    }
}

impl Default for ExtraOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            verify_tls: true,
            proxy: None,
            follow_redirects: true,
            ensure_success: true,
        }
    }
}
