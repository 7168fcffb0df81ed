//! Observability for the edition catalog
//!
//! Logging goes through `tracing`; this module only installs the
//! subscriber. HTTP request spans come from `tower_http::trace::TraceLayer`
//! in the server.
//!
//! # Usage
//!
//! ```ignore
//! use edition_catalog::observability::{init_logging, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! tracing::info!(id = 11, "created edition");
//! ```

mod logging;

pub use logging::{init_logging, LogFormat, DEFAULT_FILTER};
