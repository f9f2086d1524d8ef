//! Counseling Context - 职业咨询限界上下文
//!
//! 职责:
//! - 固定提示词模板
//! - 生成失败时的兜底回复

mod prompt;

use thiserror::Error;

pub use prompt::{PromptTemplate, CAREER_COUNSELOR_PROMPT, USER_INPUT_SLOT};

/// 模型未返回文本时的兜底回复
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

#[derive(Debug, Error)]
pub enum CounselingError {
    #[error("提示词模板缺少占位符 {{user_input}}")]
    MissingSlot,

    #[error("提示词模板只能包含一个 {{user_input}} 占位符")]
    DuplicateSlot,
}
