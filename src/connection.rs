//! Connections and the registry that resolves them.
//!
//! A connection is a named, externally stored bundle of base URL plus
//! credentials and default headers. Tasks reference connections by id;
//! the registry resolves the id at execution time.

use crate::error::TaskError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// Credentials attached to a connection.
///
/// The password is a secret: it never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login or key identifier
    pub login: String,
    /// Secret value (password, token, API key)
    pub password: Option<String>,
}

impl Credentials {
    /// Creates credentials with a login and password.
    #[must_use]
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: Some(password.into()),
        }
    }

    /// Creates credentials with a login only.
    #[must_use]
    pub fn login_only(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: None,
        }
    }

    /// Returns the secret used for token-style schemes: the password
    /// when present, otherwise the login value.
    #[must_use]
    pub fn token(&self) -> &str {
        self.password.as_deref().unwrap_or(&self.login)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// A resolved connection: where to send requests and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Base URL the endpoint path is appended to
    pub base_url: String,
    /// Headers applied to every request unless overridden by the task
    pub default_headers: HashMap<String, String>,
    /// Credentials for the configured auth scheme, if any
    pub credentials: Option<Credentials>,
}

impl Connection {
    /// Creates a connection for the given base URL.
    ///
    /// The URL must be absolute (scheme plus host). The original string
    /// is kept verbatim; it is only parsed for validation, so a request
    /// with no endpoint targets exactly this value.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TaskError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| {
            TaskError::invalid_config("base_url", format!("'{}' is not a valid URL: {}", base_url, e))
        })?;

        Ok(Self {
            base_url,
            default_headers: HashMap::new(),
            credentials: None,
        })
    }

    /// Adds a default header sent with every request.
    #[must_use]
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Sets the credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Resolves connection ids to connections.
///
/// Hosts typically back this with their own credential store; the crate
/// ships [`StaticConnectionRegistry`] for in-memory use and as the
/// product of the TOML config layer.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync + fmt::Debug {
    /// Resolves a connection id.
    ///
    /// # Errors
    ///
    /// Returns a connection resolution error if the id is unknown.
    async fn resolve(&self, connection_id: &str) -> Result<Connection, TaskError>;
}

/// An in-memory connection registry.
///
/// # Example
///
/// ```
/// use http_task::connection::{Connection, Credentials, StaticConnectionRegistry};
///
/// let registry = StaticConnectionRegistry::new().with_connection(
///     "billing_api",
///     Connection::new("https://billing.internal")
///         .unwrap()
///         .with_credentials(Credentials::new("svc-task", "hunter2")),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticConnectionRegistry {
    connections: HashMap<String, Connection>,
}

impl StaticConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection under the given id.
    #[must_use]
    pub fn with_connection(mut self, id: impl Into<String>, connection: Connection) -> Self {
        self.connections.insert(id.into(), connection);
        self
    }

    /// Inserts a connection under the given id.
    pub fn insert(&mut self, id: impl Into<String>, connection: Connection) {
        self.connections.insert(id.into(), connection);
    }

    /// Returns the number of registered connections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns true if no connections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

#[async_trait]
impl ConnectionRegistry for StaticConnectionRegistry {
    async fn resolve(&self, connection_id: &str) -> Result<Connection, TaskError> {
        self.connections
            .get(connection_id)
            .cloned()
            .ok_or_else(|| TaskError::connection_resolution(connection_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_keeps_base_url_verbatim() {
        let connection = Connection::new("https://api.example.com").unwrap();
        assert_eq!(connection.base_url, "https://api.example.com");
    }

    #[test]
    fn connection_rejects_relative_url() {
        let result = Connection::new("api.example.com/v1");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }

    #[test]
    fn connection_builder_collects_default_headers() {
        let connection = Connection::new("https://api.example.com")
            .unwrap()
            .with_default_header("Accept", "application/json")
            .with_default_header("X-Team", "data-eng");

        assert_eq!(connection.default_headers.len(), 2);
        assert_eq!(
            connection.default_headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials::new("alice", "s3cret");

        let debug = format!("{:?}", credentials);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn credentials_token_prefers_password() {
        assert_eq!(Credentials::new("alice", "s3cret").token(), "s3cret");
        assert_eq!(Credentials::login_only("raw-token").token(), "raw-token");
    }

    #[tokio::test]
    async fn static_registry_resolves_known_id() {
        let registry = StaticConnectionRegistry::new()
            .with_connection("api", Connection::new("https://api.example.com").unwrap());

        let connection = registry.resolve("api").await.unwrap();
        assert_eq!(connection.base_url, "https://api.example.com");
    }

    #[tokio::test]
    async fn static_registry_fails_for_unknown_id() {
        let registry = StaticConnectionRegistry::new();

        let error = registry.resolve("missing").await.unwrap_err();
        assert!(error.is_connection_resolution());
    }

    #[test]
    fn static_registry_len_and_is_empty() {
        let registry = StaticConnectionRegistry::new();
        assert!(registry.is_empty());

        let registry =
            registry.with_connection("api", Connection::new("https://api.example.com").unwrap());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
