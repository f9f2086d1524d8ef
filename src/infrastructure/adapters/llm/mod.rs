//! LLM Adapter - 文本生成客户端实现

mod gemini_client;

pub use gemini_client::{GeminiClient, GeminiClientConfig};
