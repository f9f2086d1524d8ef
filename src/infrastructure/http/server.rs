//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::InvalidHeaderValue;
use http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 唯一允许跨域访问的来源
    pub allowed_origin: HeaderValue,
    /// 请求体大小上限（字节）
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn from_settings(settings: &crate::config::ServerConfig) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            host: settings.host.clone(),
            port: settings.port,
            allowed_origin: HeaderValue::from_str(&settings.allowed_origin)?,
            max_body_bytes: settings.max_upload_bytes,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn build_router(&self) -> Router {
        // CORS 配置 - 只允许前端来源，携带凭据时方法和请求头按预检请求回显
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list([self.config.allowed_origin.clone()]))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .max_age(Duration::from_secs(3600));

        create_routes()
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(middleware::from_fn(error_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeGenerator, FakeSynthesizer, FakeTranscriber};
    use crate::domain::counseling::PromptTemplate;
    use axum::body::Body;
    use http::{header, Method, Request, StatusCode};
    use tower::util::ServiceExt;

    fn server(max_body_bytes: usize) -> HttpServer {
        let settings = crate::config::ServerConfig {
            max_upload_bytes: max_body_bytes,
            ..Default::default()
        };
        let state = AppState::new(
            Arc::new(FakeTranscriber::returning("hello")),
            Arc::new(FakeGenerator::returning("hi")),
            Arc::new(FakeSynthesizer::with_chunks(vec![vec![1]])),
            PromptTemplate::career_counselor().unwrap(),
        );
        HttpServer::new(ServerConfig::from_settings(&settings).unwrap(), state)
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let settings = crate::config::ServerConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            ..Default::default()
        };
        assert!(ServerConfig::from_settings(&settings).is_err());
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/chat")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = server(1024).build_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_other_origin_not_allowed() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();

        let response = server(1024).build_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_body_limit_rejects_large_payload() {
        let body = format!(r#"{{"message": "{}"}}"#, "a".repeat(4096));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = server(1024).build_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
