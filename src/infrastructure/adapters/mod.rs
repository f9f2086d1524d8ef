//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现：三个外部 AI 服务的 HTTP 客户端

pub mod llm;
pub mod stt;
pub mod tts;

pub use llm::*;
pub use stt::*;
pub use tts::*;
