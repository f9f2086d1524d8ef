//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 外部 AI 服务端口定义（语音转文字、文本生成、语音合成）
//! - commands: 四个入口的命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    handlers::{
        collect_chunks, ChatHandler, ChatReply, SynthesizedAudio, TextToSpeechHandler,
        TranscribeHandler, TranscriptionResult, VoiceChatHandler, VoiceChatResult,
    },
    Chat, TextToSpeech, Transcribe, VoiceChat,
};

pub use error::ApplicationError;

pub use ports::{
    AudioChunkStream, GenerationError, SpeechStream, SpeechSynthesizerPort, SynthesisError,
    TextGeneratorPort, TranscriberPort, TranscriptionError,
};
