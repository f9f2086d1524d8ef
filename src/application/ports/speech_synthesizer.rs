//! Speech Synthesizer Port - TTS 合成抽象
//!
//! 合成结果是惰性的、有限的、不可重放的音频分块流

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    /// 读取音频分块时中断
    #[error("Audio stream error: {0}")]
    StreamError(String),
}

/// 音频分块流
pub type AudioChunkStream = BoxStream<'static, Result<Vec<u8>, SynthesisError>>;

/// 合成响应
pub struct SpeechStream {
    /// 音频 MIME 类型
    pub content_type: String,
    /// 音频分块
    pub chunks: AudioChunkStream,
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 将文本合成为语音
    async fn synthesize(&self, text: &str) -> Result<SpeechStream, SynthesisError>;
}
