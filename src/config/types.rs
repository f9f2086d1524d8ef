//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音转文字服务配置
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// 文本生成服务配置
    #[serde(default)]
    pub generation: GenerationConfig,

    /// 语音合成服务配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 允许跨域访问的前端地址
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// 上传文件最大大小（字节）
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024 // 25 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// 语音转文字（AssemblyAI）配置
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// 服务基础 URL
    #[serde(default = "default_transcription_url")]
    pub base_url: String,

    /// API Key（来自 ASSEMBLYAI_API_KEY）
    #[serde(default)]
    pub api_key: String,

    /// 轮询转写状态的间隔（毫秒）
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// 等待转写完成的最长时间（秒）
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,

    /// 单次 HTTP 请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 上传音频临时文件目录，未设置时使用系统临时目录
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

fn default_transcription_url() -> String {
    "https://api.assemblyai.com".to_string()
}

fn default_poll_interval_ms() -> u64 {
    3000
}

fn default_max_wait_secs() -> u64 {
    600
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: default_transcription_url(),
            api_key: String::new(),
            poll_interval_ms: default_poll_interval_ms(),
            max_wait_secs: default_max_wait_secs(),
            timeout_secs: default_timeout_secs(),
            temp_dir: None,
        }
    }
}

impl TranscriptionConfig {
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// 文本生成（Gemini）配置
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_url")]
    pub base_url: String,

    /// API Key（来自 GEMINI_API_KEY）
    #[serde(default)]
    pub api_key: String,

    /// 模型名称
    #[serde(default = "default_generation_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_generation_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_generation_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_generation_url(),
            api_key: String::new(),
            model: default_generation_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 语音合成（ElevenLabs）配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default = "default_synthesis_url")]
    pub base_url: String,

    /// API Key（来自 ELEVENLABS_API_KEY）
    #[serde(default)]
    pub api_key: String,

    /// 音色 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// TTS 模型 ID
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// 输出格式，例如 mp3_44100_128
    #[serde(default = "default_output_format")]
    pub output_format: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_synthesis_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    "pNInz6obpgDQGcFmaJgB".to_string()
}

fn default_model_id() -> String {
    "eleven_turbo_v2".to_string()
}

fn default_output_format() -> String {
    "mp3_44100_128".to_string()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: default_synthesis_url(),
            api_key: String::new(),
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            output_format: default_output_format(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
