//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/random/mean` handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Stop on the shutdown signal

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::random_mean;
use crate::http::request::MakeRequestUuid;
use crate::upstream::{UpstreamClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the random mean service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> UpstreamResult<Self> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        let state = AppState { upstream };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/random/mean", any(random_mean))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    /// Server whose upstream is never reachable; only paths that stop before
    /// the first upstream call are exercised here.
    fn offline_server() -> HttpServer {
        let mut config = ServiceConfig::default();
        config.upstream.base_url = "http://127.0.0.1:9/integers/".into();
        HttpServer::new(config).unwrap()
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, String, axum::http::HeaderMap) {
        let response = offline_server()
            .router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), headers)
    }

    #[tokio::test]
    async fn test_missing_parameters() {
        let (status, body, _) = call("GET", "/random/mean").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "You have to provide 2 parameters: request(int) and length(int)");
    }

    #[tokio::test]
    async fn test_length_out_of_range() {
        let (status, body, _) = call("GET", "/random/mean?length=0&requests=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Length parameter must to be integer in range 1 - 10.000!");
    }

    #[tokio::test]
    async fn test_requests_out_of_range() {
        let (status, body, _) = call("GET", "/random/mean?length=5&requests=11").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Request parameter must to be integer in range 1 - 10!");
    }

    #[tokio::test]
    async fn test_non_get_rejected_before_validation() {
        let (status, body, _) = call("POST", "/random/mean?length=5&requests=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Method is not supported.");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_generic_500() {
        let (status, body, _) = call("GET", "/random/mean?length=5&requests=2").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Service internal error");
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let (_, _, headers) = call("GET", "/random/mean").await;
        assert!(headers.contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, _) = call("GET", "/random/median").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
