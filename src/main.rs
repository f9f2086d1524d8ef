//! Counselor - AI 职业规划语音助手
//!
//! 组装三个外部服务客户端与 HTTP 服务器

use std::sync::Arc;

use counselor::config::{load_config, print_config, LogConfig};
use counselor::domain::counseling::PromptTemplate;
use counselor::infrastructure::adapters::{
    AssemblyAiClient, AssemblyAiClientConfig, ElevenLabsClient, ElevenLabsClientConfig,
    GeminiClient, GeminiClientConfig,
};
use counselor::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},counselor={},tower_http=debug",
        log.level, log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：凭据环境变量 > COUNSELOR_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Counselor - AI Career Counselor API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保临时目录存在
    let temp_dir = config.transcription.temp_dir();
    tokio::fs::create_dir_all(&temp_dir).await?;

    // 创建外部服务客户端
    let transcriber = Arc::new(AssemblyAiClient::new(AssemblyAiClientConfig::from(
        &config.transcription,
    ))?);
    let generator = Arc::new(GeminiClient::new(GeminiClientConfig::from(
        &config.generation,
    ))?);
    let synthesizer = Arc::new(ElevenLabsClient::new(ElevenLabsClientConfig::from(
        &config.synthesis,
    ))?);

    let state = AppState::new(
        transcriber,
        generator,
        synthesizer,
        PromptTemplate::career_counselor()?,
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::from_settings(&config.server)
        .map_err(|e| anyhow::anyhow!("Invalid allowed origin: {}", e))?;
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
