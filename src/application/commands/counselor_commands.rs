//! Counselor Commands
//!
//! 四个入口彼此独立，不共享可变状态

use crate::domain::audio::UploadedAudio;

/// 文本对话命令
#[derive(Debug, Clone)]
pub struct Chat {
    pub message: String,
}

/// 语音转文字命令
#[derive(Debug, Clone)]
pub struct Transcribe {
    pub audio: UploadedAudio,
}

/// 完整语音对话命令：转写 → 生成 → 合成
#[derive(Debug, Clone)]
pub struct VoiceChat {
    pub audio: UploadedAudio,
}

/// 文字转语音命令
#[derive(Debug, Clone)]
pub struct TextToSpeech {
    pub text: String,
}
