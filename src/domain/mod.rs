//! Domain Layer - 领域层
//!
//! - Counseling: 提示词模板与回复约定
//! - Audio: 上传的音频

pub mod audio;
pub mod counseling;
