//! Root Handler
//!
//! 服务状态检查

use axum::Json;

use crate::infrastructure::http::dto::RootResponse;

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI Career Counselor API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
