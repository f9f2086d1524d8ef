//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 服务商 API Key 环境变量（ASSEMBLYAI_API_KEY / GEMINI_API_KEY / ELEVENLABS_API_KEY）
//! 2. 带前缀的环境变量（COUNSELOR_）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 服务商凭据所使用的环境变量名及其对应的配置键
const CREDENTIAL_ENV_VARS: &[(&str, &str)] = &[
    ("ASSEMBLYAI_API_KEY", "transcription.api_key"),
    ("GEMINI_API_KEY", "generation.api_key"),
    ("ELEVENLABS_API_KEY", "synthesis.api_key"),
];

/// 加载应用配置
///
/// 启动时先读取当前目录下的 `.env`（若存在），再按优先级合并配置。
///
/// # 环境变量示例
/// - `COUNSELOR_SERVER__PORT=8000`
/// - `COUNSELOR_SERVER__ALLOWED_ORIGIN=http://localhost:3000`
/// - `COUNSELOR_GENERATION__MODEL=gemini-1.5-flash`
/// - `GEMINI_API_KEY=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::LoadError(format!("Failed to read .env: {}", e)));
        }
    }
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.allowed_origin", "http://localhost:3000")?
        .set_default("server.max_upload_bytes", 25 * 1024 * 1024)?
        .set_default("transcription.base_url", "https://api.assemblyai.com")?
        .set_default("transcription.poll_interval_ms", 3000)?
        .set_default("transcription.max_wait_secs", 600)?
        .set_default("transcription.timeout_secs", 120)?
        .set_default("generation.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("generation.model", "gemini-1.5-flash")?
        .set_default("generation.timeout_secs", 120)?
        .set_default("synthesis.base_url", "https://api.elevenlabs.io")?
        .set_default("synthesis.voice_id", "pNInz6obpgDQGcFmaJgB")?
        .set_default("synthesis.model_id", "eleven_turbo_v2")?
        .set_default("synthesis.output_format", "mp3_44100_128")?
        .set_default("synthesis.timeout_secs", 120)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 带前缀的环境变量
    // 例如: COUNSELOR_SYNTHESIS__VOICE_ID=xxx
    builder = builder.add_source(
        Environment::with_prefix("COUNSELOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 服务商凭据（最高优先级）
    for (env_var, key) in CREDENTIAL_ENV_VARS {
        builder = builder.set_override_option(*key, std::env::var(env_var).ok())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 任一服务商凭据缺失都会导致启动失败
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if http::HeaderValue::from_str(&config.server.allowed_origin).is_err()
        || config.server.allowed_origin.is_empty()
    {
        return Err(ConfigError::ValidationError(format!(
            "Invalid allowed origin: {:?}",
            config.server.allowed_origin
        )));
    }

    let services = [
        ("transcription", &config.transcription.base_url, &config.transcription.api_key, "ASSEMBLYAI_API_KEY"),
        ("generation", &config.generation.base_url, &config.generation.api_key, "GEMINI_API_KEY"),
        ("synthesis", &config.synthesis.base_url, &config.synthesis.api_key, "ELEVENLABS_API_KEY"),
    ];
    for (name, base_url, api_key, env_var) in services {
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} base URL cannot be empty",
                name
            )));
        }
        if api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Missing API key for {} (set {})",
                name, env_var
            )));
        }
    }

    if config.transcription.poll_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "Transcription poll interval cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），API Key 只显示是否已设置
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Allowed Origin: {}", config.server.allowed_origin);
    tracing::info!("Max Upload: {} bytes", config.server.max_upload_bytes);
    tracing::info!("Transcription URL: {}", config.transcription.base_url);
    tracing::info!("Transcription Temp Dir: {:?}", config.transcription.temp_dir());
    tracing::info!("Generation URL: {}", config.generation.base_url);
    tracing::info!("Generation Model: {}", config.generation.model);
    tracing::info!("Synthesis URL: {}", config.synthesis.base_url);
    tracing::info!(
        "Synthesis Voice: {} ({})",
        config.synthesis.voice_id,
        config.synthesis.model_id
    );
    tracing::info!(
        "API Keys: assemblyai={} gemini={} elevenlabs={}",
        mask_key(&config.transcription.api_key),
        mask_key(&config.generation.api_key),
        mask_key(&config.synthesis.api_key)
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

fn mask_key(key: &str) -> &'static str {
    if key.is_empty() {
        "<missing>"
    } else {
        "<set>"
    }
}
