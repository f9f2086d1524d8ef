//! HTTP Routes
//!
//! API Endpoints:
//! - /                      GET   服务状态
//! - /api/chat              POST  文本对话
//! - /api/transcribe        POST  语音转文字（multipart `file`）
//! - /api/voice-chat        POST  语音对话：转写 → 生成 → 合成（multipart `file`）
//! - /api/text-to-speech    POST  文字转语音，返回音频附件

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/transcribe", post(handlers::transcribe))
        .route("/voice-chat", post(handlers::voice_chat))
        .route("/text-to-speech", post(handlers::text_to_speech))
}
