//! AssemblyAI Client - 调用 AssemblyAI 语音转文字服务
//!
//! 实现 TranscriberPort trait
//!
//! 外部 API:
//! 1. POST {base}/v2/upload                 原始音频 → {"upload_url"}
//! 2. POST {base}/v2/transcript             {"audio_url"} → {"id", "status"}
//! 3. GET  {base}/v2/transcript/{id}        轮询直到 status 为 completed 或 error

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::io::ReaderStream;

use super::scoped_file::ScopedAudioFile;
use crate::application::ports::{TranscriberPort, TranscriptionError};
use crate::config::TranscriptionConfig;
use crate::domain::audio::UploadedAudio;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: TranscriptStatus,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

/// AssemblyAI 客户端配置
#[derive(Debug, Clone)]
pub struct AssemblyAiClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// 轮询间隔
    pub poll_interval: Duration,
    /// 等待转写完成的最长时间
    pub max_wait: Duration,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 临时文件目录
    pub temp_dir: PathBuf,
}

impl From<&TranscriptionConfig> for AssemblyAiClientConfig {
    fn from(config: &TranscriptionConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_wait: Duration::from_secs(config.max_wait_secs),
            timeout_secs: config.timeout_secs,
            temp_dir: config.temp_dir(),
        }
    }
}

/// AssemblyAI 客户端
pub struct AssemblyAiClient {
    client: Client,
    config: AssemblyAiClientConfig,
}

impl AssemblyAiClient {
    pub fn new(config: AssemblyAiClientConfig) -> Result<Self, TranscriptionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranscriptionError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn upload_url(&self) -> String {
        format!("{}/v2/upload", self.config.base_url)
    }

    fn transcript_url(&self) -> String {
        format!("{}/v2/transcript", self.config.base_url)
    }

    /// 将磁盘上的音频文件以流的方式上传
    async fn upload_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            TranscriptionError::TempFileError(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

        let response = self
            .client
            .post(self.upload_url())
            .header(header::AUTHORIZATION, &self.config.api_key)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await
            .map_err(map_request_error)?;

        let upload: UploadResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("upload: {}", e)))?;

        tracing::debug!(path = %path.display(), "Audio uploaded to AssemblyAI");
        Ok(upload.upload_url)
    }

    async fn submit(&self, audio_url: &str) -> Result<TranscriptResponse, TranscriptionError> {
        let response = self
            .client
            .post(self.transcript_url())
            .header(header::AUTHORIZATION, &self.config.api_key)
            .json(&TranscriptRequest { audio_url })
            .send()
            .await
            .map_err(map_request_error)?;

        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("transcript: {}", e)))
    }

    async fn fetch(&self, id: &str) -> Result<TranscriptResponse, TranscriptionError> {
        let response = self
            .client
            .get(format!("{}/{}", self.transcript_url(), id))
            .header(header::AUTHORIZATION, &self.config.api_key)
            .send()
            .await
            .map_err(map_request_error)?;

        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("transcript: {}", e)))
    }

    /// 上传文件并等待转写完成，返回原始文本（可能为空）
    async fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let audio_url = self.upload_file(path).await?;
        let mut transcript = self.submit(&audio_url).await?;
        let deadline = Instant::now() + self.config.max_wait;

        tracing::info!(transcript_id = %transcript.id, "Transcription submitted");

        loop {
            match transcript.status {
                TranscriptStatus::Completed => {
                    return Ok(transcript.text.unwrap_or_default());
                }
                TranscriptStatus::Error => {
                    return Err(TranscriptionError::ServiceError(
                        transcript
                            .error
                            .unwrap_or_else(|| "transcription failed".to_string()),
                    ));
                }
                TranscriptStatus::Queued | TranscriptStatus::Processing => {}
            }

            if Instant::now() + self.config.poll_interval > deadline {
                tracing::warn!(transcript_id = %transcript.id, "Transcription did not finish in time");
                return Err(TranscriptionError::Timeout);
            }
            tokio::time::sleep(self.config.poll_interval).await;

            transcript = self.fetch(&transcript.id).await?;
        }
    }
}

fn map_request_error(e: reqwest::Error) -> TranscriptionError {
    if e.is_timeout() {
        TranscriptionError::Timeout
    } else if e.is_connect() {
        TranscriptionError::NetworkError(format!("Cannot connect to AssemblyAI: {}", e))
    } else {
        TranscriptionError::NetworkError(e.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, TranscriptionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response.text().await.unwrap_or_default();
    Err(TranscriptionError::ServiceError(format!(
        "HTTP {}: {}",
        status, error_text
    )))
}

#[async_trait]
impl TranscriberPort for AssemblyAiClient {
    async fn transcribe(&self, audio: &UploadedAudio) -> Result<String, TranscriptionError> {
        let scoped = ScopedAudioFile::create(&self.config.temp_dir, audio).await?;
        let result = self.transcribe_file(scoped.path()).await;
        drop(scoped);

        let text = result?;
        if text.trim().is_empty() {
            return Err(TranscriptionError::NoSpeech);
        }

        tracing::info!(text_len = text.len(), "AssemblyAI transcription completed");
        Ok(text)
    }
}
