//! Application Ports - 出站端口定义
//!
//! 定义应用层与外部 AI 服务之间的抽象接口

mod speech_synthesizer;
mod text_generator;
mod transcriber;

pub use speech_synthesizer::{AudioChunkStream, SpeechStream, SpeechSynthesizerPort, SynthesisError};
pub use text_generator::{GenerationError, TextGeneratorPort};
pub use transcriber::{TranscriberPort, TranscriptionError};
