//! Transcriber Port - 语音转文字抽象
//!
//! 具体实现在 infrastructure/adapters/stt

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::UploadedAudio;

/// 语音转文字错误
#[derive(Debug, Error)]
pub enum TranscriptionError {
    /// 服务返回了空文本（静音或无法识别）
    #[error("Could not transcribe audio")]
    NoSpeech,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Temporary file error: {0}")]
    TempFileError(String),
}

/// Transcriber Port
///
/// 外部语音转文字服务的抽象接口
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    /// 识别上传音频中的语音
    ///
    /// 返回识别出的文本；文本为空时返回 `TranscriptionError::NoSpeech`
    async fn transcribe(&self, audio: &UploadedAudio) -> Result<String, TranscriptionError>;
}
