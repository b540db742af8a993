//! Configuration file loading.
//!
//! This module handles loading http-task connection configuration from
//! TOML files at XDG-compliant locations.

use crate::config::types::ConnectionsConfig;
use crate::error::TaskError;
use std::path::{Path, PathBuf};

/// Default configuration file name for project-local config.
const LOCAL_CONFIG_NAME: &str = "http-task.toml";

/// Default configuration file name within XDG config directory.
const XDG_CONFIG_NAME: &str = "config.toml";

/// Application name for XDG directory lookup.
const APP_NAME: &str = "http-task";

/// Loads configuration from the default search paths.
///
/// Search order:
/// 1. `./http-task.toml` (project-local)
/// 2. `~/.config/http-task/config.toml` (XDG config)
///
/// Returns an empty configuration if no config file is found.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed.
pub fn load() -> Result<ConnectionsConfig, TaskError> {
    // Try project-local config first
    let local_path = PathBuf::from(LOCAL_CONFIG_NAME);
    if local_path.exists() {
        return from_path(&local_path);
    }

    // Try XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_path = config_dir.join(APP_NAME).join(XDG_CONFIG_NAME);
        if xdg_path.exists() {
            return from_path(&xdg_path);
        }
    }

    // No config file found - return empty config
    Ok(ConnectionsConfig::default())
}

/// Loads configuration from a specific file path.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains invalid TOML,
/// or does not match the expected schema.
pub fn from_path(path: &Path) -> Result<ConnectionsConfig, TaskError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        TaskError::invalid_config(
            "config_file",
            format!("failed to read '{}': {}", path.display(), e),
        )
    })?;

    from_str(&contents).map_err(|e| {
        TaskError::invalid_config(
            "config_file",
            format!("failed to parse '{}': {}", path.display(), e),
        )
    })
}

/// Parses configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or doesn't match the schema.
///
/// # Example
///
/// ```
/// use http_task::config;
///
/// let toml = r#"
/// [connections.billing_api]
/// base_url = "https://billing.internal"
/// login = "svc-task"
/// password_env = "BILLING_API_PASSWORD"
/// "#;
///
/// let config = config::from_str(toml).unwrap();
/// assert_eq!(config.connection_count(), 1);
/// ```
pub fn from_str(toml_str: &str) -> Result<ConnectionsConfig, TaskError> {
    toml::from_str(toml_str)
        .map_err(|e| TaskError::invalid_config("config", format!("invalid TOML: {e}")))
}

/// Returns the paths that would be searched for configuration files.
///
/// This is useful for diagnostics and user guidance.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_NAME)];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join(XDG_CONFIG_NAME));
    }

    paths
}

/// Returns the path to the XDG config directory for http-task.
///
/// This is `~/.config/http-task` on most systems.
#[must_use]
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn from_str_parses_valid_toml() {
        let toml = r#"
[connections.billing_api]
base_url = "https://billing.internal"
login = "svc-task"
password_env = "BILLING_API_PASSWORD"
        "#;

        let config = from_str(toml).unwrap();

        assert_eq!(config.connection_count(), 1);
        let connection = config.connections.get("billing_api").unwrap();
        assert_eq!(connection.base_url, "https://billing.internal");
        assert_eq!(connection.login.as_deref(), Some("svc-task"));
    }

    #[test]
    fn from_str_parses_multiple_connections_with_headers() {
        let toml = r#"
[connections.billing_api]
base_url = "https://billing.internal"

[connections.metrics]
base_url = "https://metrics.internal"

[connections.metrics.headers]
Accept = "application/json"
"X-Team" = "data-eng"
        "#;

        let config = from_str(toml).unwrap();

        assert_eq!(config.connection_count(), 2);
        let metrics = config.connections.get("metrics").unwrap();
        assert_eq!(metrics.headers.len(), 2);
        assert_eq!(
            metrics.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn from_str_error_on_invalid_toml() {
        let invalid = "this is not valid toml [[[";

        let result = from_str(invalid);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid TOML"));
    }

    #[test]
    fn from_str_error_on_missing_base_url() {
        let toml = r#"
[connections.api]
login = "svc"
        "#;

        assert!(from_str(toml).is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("connections.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[connections.api]\nbase_url = \"https://api.example.com\""
        )
        .unwrap();

        let config = from_path(&path).unwrap();
        assert_eq!(config.connection_count(), 1);
    }

    #[test]
    fn from_path_error_for_missing_file() {
        let result = from_path(Path::new("/nonexistent/http-task.toml"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("failed to read"));
    }

    #[test]
    fn search_paths_starts_with_local_file() {
        let paths = search_paths();

        assert!(!paths.is_empty());
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG_NAME));
    }

    #[test]
    fn xdg_config_dir_ends_with_app_name() {
        if let Some(dir) = xdg_config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
