//! # HTTP Server
//!
//! Combines the edition and health routers into one axum application.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::edition_routes::edition_routes;
use super::health_routes::{health_routes, route_not_found};
use crate::catalog::EditionService;
use crate::store::{EditionStore, FileEditionStore};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the full application router around an edition service
pub fn build_router<S: EditionStore + 'static>(service: Arc<EditionService<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes())
        .merge(edition_routes(service))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the edition catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the JSON document at `config.db_path`
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = FileEditionStore::new(&config.db_path);
        Self::with_store(config, store)
    }

    /// Create a server backed by any edition store
    pub fn with_store<S: EditionStore + 'static>(config: HttpServerConfig, store: S) -> Self {
        let router = build_router(Arc::new(EditionService::new(store)));
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;

        info!(%addr, db = %self.config.db_path.display(), "edition catalog listening");
        info!("health check: http://{}/health", addr);
        info!("GET    /editions      list editions (q, tag, sortBy, sortOrder, page, limit)");
        info!("POST   /editions      create edition");
        info!("PUT    /editions/:id  update edition");
        info!("DELETE /editions/:id  delete edition");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("edition catalog stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEditionStore;

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_store(config, MemoryEditionStore::new());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::with_config(HttpServerConfig::default());
        let _router = server.router();
        // Building the router does not touch the document
    }

    #[tokio::test]
    async fn test_start_rejects_bad_host() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            ..HttpServerConfig::default()
        };
        let server = HttpServer::with_store(config, MemoryEditionStore::new());
        let err = server.start().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
