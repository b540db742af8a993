//! Custom error types for HTTP task execution.
//!
//! This module contains the single error type surfaced by the crate.
//! It implements Display, Debug, Clone, PartialEq, Eq, and std::error::Error.
//!
//! No external error crates (anyhow, thiserror, eyre) are used.

use std::fmt;
use std::time::Duration;

/// Errors that can occur while executing an HTTP task.
///
/// Every failure propagates to the caller (the external scheduler)
/// unmodified; this crate performs no local recovery, retry, or
/// suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskError {
    /// The specific error that occurred
    pub kind: TaskErrorKind,
}

/// Specific task error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskErrorKind {
    /// The connection id could not be resolved by the registry
    ConnectionResolution {
        /// The connection id that was looked up
        connection_id: String,
    },
    /// Network-level failure (connection refused, DNS, broken transfer)
    Transport {
        /// Description of the transport failure
        message: String,
    },
    /// The request did not complete within the configured timeout
    Timeout {
        /// The timeout that was exceeded, if one was configured
        duration: Option<Duration>,
    },
    /// The endpoint answered with a non-success status
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },
    /// The response check returned false
    ResponseValidation,
    /// The response filter failed
    ResponseFilter {
        /// The error raised by the filter, unmodified
        reason: String,
    },
    /// Task or connection configuration is invalid
    InvalidConfig {
        /// The configuration field that was invalid
        field: String,
        /// Why it was invalid
        reason: String,
    },
}

impl TaskError {
    /// Creates a new TaskError with the given kind.
    #[must_use]
    pub fn new(kind: TaskErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a connection resolution error.
    #[must_use]
    pub fn connection_resolution(connection_id: impl Into<String>) -> Self {
        Self::new(TaskErrorKind::ConnectionResolution {
            connection_id: connection_id.into(),
        })
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(TaskErrorKind::Transport {
            message: message.into(),
        })
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(duration: Option<Duration>) -> Self {
        Self::new(TaskErrorKind::Timeout { duration })
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::new(TaskErrorKind::HttpStatus {
            status,
            body: body.into(),
        })
    }

    /// Creates a response validation error.
    #[must_use]
    pub fn response_validation() -> Self {
        Self::new(TaskErrorKind::ResponseValidation)
    }

    /// Creates a response filter error.
    #[must_use]
    pub fn response_filter(reason: impl Into<String>) -> Self {
        Self::new(TaskErrorKind::ResponseFilter {
            reason: reason.into(),
        })
    }

    /// Creates an invalid config error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(TaskErrorKind::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// Returns true if this error came from resolving the connection id.
    #[must_use]
    pub fn is_connection_resolution(&self) -> bool {
        matches!(self.kind, TaskErrorKind::ConnectionResolution { .. })
    }

    /// Returns true if this error is a transport or timeout failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            TaskErrorKind::Transport { .. } | TaskErrorKind::Timeout { .. }
        )
    }

    /// Returns true if this error indicates a failed response check.
    #[must_use]
    pub fn is_response_validation(&self) -> bool {
        matches!(self.kind, TaskErrorKind::ResponseValidation)
    }

    /// Returns the HTTP status code if the endpoint answered with an error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            TaskErrorKind::HttpStatus { status, .. } => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TaskErrorKind::ConnectionResolution { connection_id } => {
                write!(
                    f,
                    "connection '{}' not found; verify the connection id is registered",
                    connection_id
                )
            }
            TaskErrorKind::Transport { message } => {
                write!(
                    f,
                    "transport error: {}; check network connectivity and the base URL",
                    message
                )
            }
            TaskErrorKind::Timeout { duration } => match duration {
                Some(duration) => {
                    write!(f, "request timed out after {} seconds", duration.as_secs())
                }
                None => write!(f, "request timed out"),
            },
            TaskErrorKind::HttpStatus { status, body } => {
                write!(f, "endpoint returned HTTP {}: {}", status, body)
            }
            TaskErrorKind::ResponseValidation => {
                write!(f, "response check returned false")
            }
            TaskErrorKind::ResponseFilter { reason } => {
                write!(f, "response filter failed: {}", reason)
            }
            TaskErrorKind::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for TaskError {}
