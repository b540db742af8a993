//! Configuration types for named connections.
//!
//! This module provides types for defining multiple named connections
//! in configuration files.

use crate::connection::{Connection, Credentials, StaticConnectionRegistry};
use crate::error::TaskError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration structure for http-task.
///
/// This structure maps directly to the TOML configuration file format:
///
/// ```toml
/// [connections.billing_api]
/// base_url = "https://billing.internal"
/// login = "svc-task"
/// password_env = "BILLING_API_PASSWORD"
///
/// [connections.billing_api.headers]
/// Accept = "application/json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionsConfig {
    /// Named connection configurations.
    ///
    /// Each key is the connection id (e.g., "billing_api") that tasks
    /// reference at construction time.
    #[serde(default)]
    pub connections: HashMap<String, NamedConnectionConfig>,
}

impl ConnectionsConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named connection to the configuration.
    #[must_use]
    pub fn with_connection(mut self, id: impl Into<String>, config: NamedConnectionConfig) -> Self {
        self.connections.insert(id.into(), config);
        self
    }

    /// Returns true if the configuration has no connections defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Returns the number of connections defined.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Materializes a registry from this configuration.
    ///
    /// Resolves environment-variable indirection for secrets and
    /// validates every base URL.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending connection id when a base
    /// URL is invalid.
    pub fn into_registry(self) -> Result<StaticConnectionRegistry, TaskError> {
        let mut registry = StaticConnectionRegistry::new();

        for (id, config) in self.connections {
            let connection = config.to_connection().map_err(|e| {
                TaskError::invalid_config(format!("connections.{}", id), e.to_string())
            })?;
            registry.insert(id, connection);
        }

        Ok(registry)
    }
}

/// Configuration for a single named connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedConnectionConfig {
    /// Base URL requests are sent against.
    pub base_url: String,

    /// Login or key identifier.
    #[serde(default)]
    pub login: Option<String>,

    /// Direct secret value (discouraged - use password_env instead).
    #[serde(default)]
    pub password: Option<String>,

    /// Environment variable name containing the secret.
    ///
    /// This is the recommended way to provide secrets. The value of
    /// this environment variable is read when the registry is built.
    #[serde(default)]
    pub password_env: Option<String>,

    /// Headers applied to every request against this connection.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl NamedConnectionConfig {
    /// Creates a connection configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login: None,
            password: None,
            password_env: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the login.
    #[must_use]
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets a direct secret value (discouraged).
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the secret environment variable.
    #[must_use]
    pub fn with_password_env(mut self, env_var: impl Into<String>) -> Self {
        self.password_env = Some(env_var.into());
        self
    }

    /// Adds a default header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Resolves the secret from environment or direct value.
    ///
    /// Resolution order:
    /// 1. `password_env` - read from environment variable
    /// 2. `password` - direct value in config (discouraged)
    /// 3. None
    #[must_use]
    pub fn resolve_password(&self) -> Option<String> {
        if let Some(ref env_var) = self.password_env {
            if let Ok(secret) = std::env::var(env_var) {
                if !secret.is_empty() {
                    return Some(secret);
                }
            }
        }

        self.password.clone()
    }

    /// Converts this file configuration to a runtime connection.
    ///
    /// Resolves the secret and validates the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL.
    pub fn to_connection(&self) -> Result<Connection, TaskError> {
        let mut connection = Connection::new(&self.base_url)?;

        for (name, value) in &self.headers {
            connection = connection.with_default_header(name, value);
        }

        let password = self.resolve_password();
        if self.login.is_some() || password.is_some() {
            connection = connection.with_credentials(Credentials {
                login: self.login.clone().unwrap_or_default(),
                password,
            });
        }

        Ok(connection)
    }
}
