//! Chat Handlers - 文本对话与文字转语音

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{Chat, TextToSpeech};
use crate::infrastructure::http::dto::{ChatRequest, ChatResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载音频时的文件名
const SPEECH_FILE_NAME: &str = "speech.mp3";

/// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;

    let result = state
        .chat_handler
        .handle(Chat {
            message: req.message,
        })
        .await?;

    Ok(Json(ChatResponse {
        response: result.reply,
        audio_url: None,
    }))
}

/// POST /api/text-to-speech
///
/// 返回完整的音频文件（以附件形式下载）
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let audio = state
        .text_to_speech_handler
        .handle(TextToSpeech { text: req.message })
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, audio.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", SPEECH_FILE_NAME),
            ),
        ],
        audio.audio_data,
    )
        .into_response())
}
