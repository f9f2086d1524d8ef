//! Multipart 音频上传解析

use axum::extract::Multipart;

use crate::domain::audio::UploadedAudio;
use crate::infrastructure::http::error::ApiError;

/// 上传表单中音频文件的字段名
pub const AUDIO_FIELD: &str = "file";

/// 读取 `file` 字段为 UploadedAudio，忽略其他字段
pub async fn read_audio_upload(mut multipart: Multipart) -> Result<UploadedAudio, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field.bytes().await?;

        let mut audio = UploadedAudio::new(data.to_vec());
        if let Some(name) = file_name {
            audio = audio.with_file_name(name);
        }
        if let Some(content_type) = content_type {
            audio = audio.with_content_type(content_type);
        }

        tracing::debug!(
            file_name = ?audio.file_name(),
            content_type = ?audio.content_type(),
            size = audio.len(),
            "Audio upload received"
        );

        return Ok(audio);
    }

    Err(ApiError::BadRequest("Audio file is required".to_string()))
}
