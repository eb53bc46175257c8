//! Application startup and lifecycle management.
//!
//! Binds the HTTP listener, assembles the router with its CORS and trace
//! layers, and runs the server until a shutdown signal arrives.

use crate::config::AiServiceConfig;
use crate::error::AppError;
use crate::handlers;
use axum::http::{HeaderValue, Request};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the service router: health probes, placeholder AI endpoints, and
/// the CORS and tracing layers applied to every route.
pub fn build_router(config: &AiServiceConfig) -> Result<Router, AppError> {
    let cors = cors_layer(&config.security.allowed_origins)?;

    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .merge(handlers::ai::router())
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add CORS layer
        .layer(cors);

    Ok(router)
}

/// Credentialed CORS forbids the `Any` wildcard, so methods and headers
/// are mirrored from the request instead.
fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, AppError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<HeaderValue>, AppError>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binding to port 0 picks a random free port, which the integration
    /// tests rely on.
    pub async fn build(config: AiServiceConfig) -> Result<Self, AppError> {
        let router = build_router(&config)?;

        let addr = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("ai-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped by ctrl-c or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_rejects_unparsable_origin() {
        let result = cors_layer(&["http://bad\norigin".to_string()]);
        assert!(matches!(result, Err(AppError::InvalidOrigin(_))));
    }

    #[test]
    fn cors_layer_accepts_development_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:4000".to_string(),
        ];
        assert!(cors_layer(&origins).is_ok());
    }
}
