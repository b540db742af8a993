//! Configuration management for http-task.
//!
//! This module provides types and functions for loading named
//! connections from configuration files.
//!
//! # Configuration File Format
//!
//! Configuration is stored in TOML format. The search order is:
//! 1. `./http-task.toml` (project-local)
//! 2. `~/.config/http-task/config.toml` (XDG config)
//!
//! # Example Configuration
//!
//! ```toml
//! # Define connections by id
//! [connections.billing_api]
//! base_url = "https://billing.internal"
//! login = "svc-task"
//! password_env = "BILLING_API_PASSWORD"
//!
//! [connections.billing_api.headers]
//! Accept = "application/json"
//!
//! [connections.status_page]
//! base_url = "https://status.example.com"
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use http_task::config;
//!
//! // Load from default search paths and build a registry
//! let registry = config::load()?.into_registry()?;
//!
//! // Load from a specific path
//! let config = config::from_path(Path::new("/etc/http-task/config.toml"))?;
//!
//! // Parse from a string
//! let config = config::from_str(toml_content)?;
//! ```

mod file;
mod types;

// Re-export file loading functions
pub use file::{from_path, from_str, load, search_paths, xdg_config_dir};

// Re-export types
pub use types::{ConnectionsConfig, NamedConnectionConfig};
