//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount a resource `Router` inside an Axum app
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop on Ctrl+C or an internal shutdown trigger

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::Router;

/// HTTP server hosting a resource router.
pub struct HttpServer {
    app: axum::Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `router` with the given configuration.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        let app = Self::build_app(&config, router);
        Self { app, config }
    }

    /// Build the Axum app with all middleware layers.
    ///
    /// Every request falls through to `router`; Axum only contributes the
    /// layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, router: Router) -> axum::Router {
        axum::Router::new()
            .fallback_service(router)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl+C or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The assembled Axum app, for driving in-process.
    pub fn app(&self) -> &axum::Router {
        &self.app
    }
}
