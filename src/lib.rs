//! edition-catalog - a small file-backed REST catalog of publication editions
//!
//! The whole collection lives in one JSON document. Every request reloads
//! it; every write rewrites it.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
pub mod validation;
