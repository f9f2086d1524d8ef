//! HTTP Error Handling
//!
//! 错误统一以 `{"detail": "..."}` 返回，并带上对应的 HTTP 状态码

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, TranscriptionError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 缺少或无效的输入
    BadRequest(String),
    /// 请求体超过大小限制
    PayloadTooLarge(String),
    /// 外部服务调用失败
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::BadRequest(msg) | ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Upstream service failed");
                msg
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::Transcription(TranscriptionError::NoSpeech) => {
                ApiError::BadRequest(TranscriptionError::NoSpeech.to_string())
            }
            ApplicationError::Transcription(e) => {
                ApiError::Internal(format!("Transcription error: {}", e))
            }
            ApplicationError::Generation(e) => {
                ApiError::Internal(format!("Error generating response: {}", e))
            }
            ApplicationError::Synthesis(e) => ApiError::Internal(format!("TTS error: {}", e)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(e.body_text())
        } else {
            ApiError::BadRequest(e.body_text())
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(e: MultipartRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        let detail = format!("Failed to read multipart field: {}", e.body_text());
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(detail)
        } else {
            ApiError::BadRequest(detail)
        }
    }
}
