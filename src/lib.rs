//! # http-task: single-shot HTTP task primitive
//!
//! One task unit for workflow orchestrators: executed by an external
//! scheduler, it issues a single HTTP request against a named
//! connection, optionally validates and transforms the response, and
//! hands the result back. Scheduling, retries, and templating belong to
//! the host; connection pooling, TLS, and redirects belong to the HTTP
//! client underneath.
//!
//! ## Architecture
//!
//! - **HttpTask**: the request descriptor plus its `execute` operation
//! - **ConnectionRegistry**: resolves connection ids to base URL,
//!   default headers, and credentials
//! - **AuthScheme**: closed set of credential-encoding strategies
//! - **HttpTransport**: performs the one exchange via `reqwest`
//! - **Config**: named connections loaded from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use http_task::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TaskError> {
//!     let registry = http_task::config::load()?.into_registry()?;
//!
//!     let task = HttpTask::new("billing_api")
//!         .with_method("GET")
//!         .with_endpoint("invoices/latest")
//!         .with_response_check(|response, _| response.status == 200);
//!
//!     let result = task.execute(&registry, &ExecutionContext::new()).await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod connection;
pub mod context;
pub mod error;
pub mod options;
pub mod response;
pub mod task;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::auth::AuthScheme;
    pub use crate::config::{ConnectionsConfig, NamedConnectionConfig};
    pub use crate::connection::{
        Connection, ConnectionRegistry, Credentials, StaticConnectionRegistry,
    };
    pub use crate::context::ExecutionContext;
    pub use crate::error::{TaskError, TaskErrorKind};
    pub use crate::options::ExtraOptions;
    pub use crate::response::HttpResponse;
    pub use crate::task::{HttpTask, ResponseCheck, ResponseFilter};
    pub use crate::transport::HttpTransport;
}
