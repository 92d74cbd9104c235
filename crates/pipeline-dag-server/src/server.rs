//! HTTP server setup.
//!
//! Builds the axum router with its CORS, body-limit and tracing layers, and
//! runs it until Ctrl-C.

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::routes;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The pipeline HTTP server.
#[derive(Debug, Clone)]
pub struct PipelineServer {
    config: ServerConfig,
    allowed_origin: HeaderValue,
}

impl PipelineServer {
    /// Create a server from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration fails validation.
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        let allowed_origin = config.origin_header()?;
        Ok(Self {
            config,
            allowed_origin,
        })
    }

    /// Get the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router with all routes and layers.
    #[must_use]
    pub fn router(&self) -> Router {
        // `list` only echoes the origin back when the request comes from it.
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list([self.allowed_origin.clone()]))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request());

        Router::new()
            .route("/", get(routes::ping))
            .route("/pipelines/parse", post(routes::parse_pipeline))
            .route("/schema", get(routes::schema))
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address cannot be bound, or
    /// [`Error::Io`] if serving fails.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|source| Error::Bind { addr, source })?;

        info!(
            addr = %listener.local_addr()?,
            allowed_origin = %self.config.allowed_origin,
            "Listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("Shutdown requested");
}
