//! Audio Context - 音频限界上下文
//!
//! 职责:
//! - 上传音频值对象
//! - 音频格式识别

mod value_objects;

pub use value_objects::{AudioFormat, UploadedAudio};
