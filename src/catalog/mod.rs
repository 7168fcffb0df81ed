//! # Edition Catalog
//!
//! Resource operations (list, create, update, delete) composed from the
//! record store, the query pipeline and payload validation.

pub mod errors;
pub mod service;

pub use errors::{CatalogError, CatalogResult};
pub use service::EditionService;
