//! # HTTP Server Module
//!
//! REST surface of the edition catalog.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /editions` - Search, sort and paginate editions
//! - `POST /editions` - Create an edition
//! - `PUT /editions/:id` - Update an edition
//! - `DELETE /editions/:id` - Delete an edition
//!
//! Anything else answers 404 `{"error": "Route not found"}`.

pub mod config;
pub mod edition_routes;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer, MAX_BODY_BYTES};
