//! Counselor - AI 职业规划语音助手后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Counseling: 职业规划提示词模板
//! - Audio: 上传音频值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Transcriber, TextGenerator, SpeechSynthesizer）
//! - Commands: Chat / Transcribe / VoiceChat / TextToSpeech 命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: AssemblyAI, Gemini, ElevenLabs 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
