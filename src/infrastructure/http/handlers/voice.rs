//! Voice Handlers - 语音转文字与完整语音对话

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::sync::Arc;

use super::upload::read_audio_upload;
use crate::application::{Transcribe, VoiceChat};
use crate::infrastructure::http::dto::{encode_hex, TranscriptionResponse, VoiceChatResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/transcribe
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let audio = read_audio_upload(multipart?).await?;

    let result = state.transcribe_handler.handle(Transcribe { audio }).await?;

    Ok(Json(TranscriptionResponse {
        transcription: result.text,
    }))
}

/// POST /api/voice-chat
///
/// 转写 → 生成 → 合成，音频以十六进制字符串放入 JSON
pub async fn voice_chat(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VoiceChatResponse>, ApiError> {
    let audio = read_audio_upload(multipart?).await?;

    let result = state.voice_chat_handler.handle(VoiceChat { audio }).await?;

    Ok(Json(VoiceChatResponse {
        transcription: result.transcription,
        response: result.reply,
        audio_data: encode_hex(&result.audio.audio_data),
    }))
}
