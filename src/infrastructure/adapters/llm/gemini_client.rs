//! Gemini Client - 调用 Google Gemini 文本生成服务
//!
//! 实现 TextGeneratorPort trait
//!
//! 外部 API:
//! POST {base}/v1beta/models/{model}:generateContent
//! Request: {"contents": [{"role": "user", "parts": [{"text": "..."}]}]}
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GenerationError, TextGeneratorPort};
use crate::config::GenerationConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 取第一个候选结果的全部文本
    ///
    /// 没有候选结果是生成错误；有候选但没有文本时返回 None，由上层换成兜底回复
    fn into_text(self) -> Result<Option<String>, GenerationError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "empty response".to_string());
            return Err(GenerationError::NoCandidates(reason));
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if texts.is_empty() {
            tracing::debug!(finish_reason = ?candidate.finish_reason, "Candidate has no text parts");
            return Ok(None);
        }
        Ok(Some(texts.concat()))
    }
}

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl From<&GenerationConfig> for GeminiClientConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Gemini 客户端
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl TextGeneratorPort for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else if e.is_connect() {
                    GenerationError::NetworkError(format!("Cannot connect to Gemini: {}", e))
                } else {
                    GenerationError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let text = body.into_text()?;

        tracing::info!(
            model = %self.config.model,
            reply_len = text.as_ref().map(|t| t.len()).unwrap_or(0),
            "Gemini generation completed"
        );

        Ok(text)
    }
}
