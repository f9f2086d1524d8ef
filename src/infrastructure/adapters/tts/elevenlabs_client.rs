//! ElevenLabs Client - 调用 ElevenLabs TTS 服务
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST {base}/v1/text-to-speech/{voice_id}?output_format=mp3_44100_128
//! Request: {"text": "...", "model_id": "eleven_turbo_v2"}  (JSON)
//! Response: audio/mpeg 分块传输

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::{header, Client};
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechStream, SpeechSynthesizerPort, SynthesisError};
use crate::config::SynthesisConfig;

const API_KEY_HEADER: &str = "xi-api-key";
const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// TTS 请求体 (JSON)
#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
    pub timeout_secs: u64,
}

impl From<&SynthesisConfig> for ElevenLabsClientConfig {
    fn from(config: &SynthesisConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            output_format: config.output_format.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// ElevenLabs 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn convert_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        )
    }
}

#[async_trait]
impl SpeechSynthesizerPort for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<SpeechStream, SynthesisError> {
        tracing::debug!(
            voice_id = %self.config.voice_id,
            model_id = %self.config.model_id,
            text_len = text.len(),
            "Sending TTS request"
        );

        let response = self
            .client
            .post(self.convert_url())
            .query(&[("output_format", self.config.output_format.as_str())])
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(header::ACCEPT, DEFAULT_CONTENT_TYPE)
            .json(&TextToSpeechRequest {
                text,
                model_id: &self.config.model_id,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to ElevenLabs: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("audio/"))
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let chunks = response
            .bytes_stream()
            .map_ok(|chunk| chunk.to_vec())
            .map_err(|e| SynthesisError::StreamError(e.to_string()))
            .boxed();

        Ok(SpeechStream {
            content_type,
            chunks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::collect_chunks;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> ElevenLabsClient {
        ElevenLabsClient::new(ElevenLabsClientConfig {
            base_url: server.url(),
            api_key: "test-eleven-key".to_string(),
            voice_id: "voice-1".to_string(),
            model_id: "eleven_turbo_v2".to_string(),
            output_format: "mp3_44100_128".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_config_from_settings() {
        let config = ElevenLabsClientConfig::from(&SynthesisConfig::default());
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.voice_id, "pNInz6obpgDQGcFmaJgB");
        assert_eq!(config.output_format, "mp3_44100_128");
    }

    #[tokio::test]
    async fn test_synthesize_returns_full_audio() {
        let fake_audio: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/text-to-speech/voice-1")
            .match_query(Matcher::UrlEncoded(
                "output_format".into(),
                "mp3_44100_128".into(),
            ))
            .match_header("xi-api-key", "test-eleven-key")
            .match_body(Matcher::PartialJsonString(
                r#"{"text": "Hello student", "model_id": "eleven_turbo_v2"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(fake_audio.clone())
            .create_async()
            .await;

        let speech = client_for(&server).synthesize("Hello student").await.unwrap();
        assert_eq!(speech.content_type, "audio/mpeg");

        let audio = collect_chunks(speech.chunks).await.unwrap();

        mock.assert_async().await;
        assert_eq!(audio.len(), fake_audio.len());
        assert_eq!(audio, fake_audio);
    }

    #[tokio::test]
    async fn test_missing_content_type_defaults_to_mpeg() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/text-to-speech/voice-1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(vec![1u8, 2, 3])
            .create_async()
            .await;

        let speech = client_for(&server).synthesize("Hi").await.unwrap();
        assert_eq!(speech.content_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_api_error_returns_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/text-to-speech/voice-1")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"detail": {"status": "invalid_api_key"}}"#)
            .create_async()
            .await;

        let result = client_for(&server).synthesize("Hello").await;

        mock.assert_async().await;
        match result {
            Err(SynthesisError::ServiceError(msg)) => assert!(msg.contains("401")),
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => panic!("expected an error"),
        }
    }
}
