//! Text Generator Port - 大模型文本生成抽象

use async_trait::async_trait;
use thiserror::Error;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 模型没有返回任何候选结果（例如提示词被拦截）
    #[error("Model returned no candidates: {0}")]
    NoCandidates(String),
}

/// Text Generator Port
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// 对完整提示词调用一次模型
    ///
    /// - `Ok(Some(text))` 模型返回了文本
    /// - `Ok(None)` 有候选结果但不含文本
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}
