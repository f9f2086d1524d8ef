//! 应用层错误定义
//!
//! 统一的命令错误类型，包装各外部服务的错误

use thiserror::Error;

use crate::application::ports::{GenerationError, SynthesisError, TranscriptionError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 缺少必需的输入
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 流水线中出错的阶段名，用于日志
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "validation",
            Self::Transcription(_) => "transcription",
            Self::Generation(_) => "generation",
            Self::Synthesis(_) => "synthesis",
        }
    }
}
