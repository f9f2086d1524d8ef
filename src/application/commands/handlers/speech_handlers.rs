//! Text-to-Speech Command Handler
//!
//! 合成服务支持分块输出，这里收集全部分块后一次性返回

use futures_util::StreamExt;
use std::sync::Arc;

use crate::application::commands::TextToSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioChunkStream, SpeechSynthesizerPort, SynthesisError};

/// 合成好的完整音频
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub content_type: String,
    pub audio_data: Vec<u8>,
}

/// TextToSpeech Handler
pub struct TextToSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl TextToSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(&self, command: TextToSpeech) -> Result<SynthesizedAudio, ApplicationError> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("Message is required"));
        }

        let speech = self.synthesizer.synthesize(&command.text).await?;
        let audio_data = collect_chunks(speech.chunks).await?;

        tracing::info!(
            text_len = command.text.len(),
            audio_size = audio_data.len(),
            content_type = %speech.content_type,
            "Speech synthesized"
        );

        Ok(SynthesizedAudio {
            content_type: speech.content_type,
            audio_data,
        })
    }
}

/// 按顺序拼接所有分块，跳过空分块
pub async fn collect_chunks(mut chunks: AudioChunkStream) -> Result<Vec<u8>, SynthesisError> {
    let mut audio_data = Vec::new();
    let mut chunk_count = 0usize;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        chunk_count += 1;
        audio_data.extend_from_slice(&chunk);
    }

    tracing::debug!(chunk_count, total = audio_data.len(), "Collected audio chunks");

    Ok(audio_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeSynthesizer;
    use futures_util::stream;

    #[tokio::test]
    async fn test_output_length_is_sum_of_chunks() {
        let chunks = vec![vec![1u8; 1024], vec![2u8; 7], Vec::new(), vec![3u8; 300]];
        let expected: Vec<u8> = chunks.concat();
        let synthesizer = Arc::new(FakeSynthesizer::with_chunks(chunks));

        let audio = TextToSpeechHandler::new(synthesizer.clone())
            .handle(TextToSpeech {
                text: "Hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(audio.audio_data.len(), 1024 + 7 + 300);
        assert_eq!(audio.audio_data, expected);
        assert_eq!(audio.content_type, "audio/mpeg");
        assert_eq!(synthesizer.calls(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_is_synthesis_error() {
        let synthesizer = Arc::new(FakeSynthesizer::failing("invalid voice"));
        let err = TextToSpeechHandler::new(synthesizer)
            .handle(TextToSpeech {
                text: "Hello".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Synthesis(SynthesisError::ServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_broken_stream_is_error() {
        let synthesizer = Arc::new(FakeSynthesizer::breaking_after(
            vec![vec![1u8; 10], vec![2u8; 10], vec![3u8; 10]],
            2,
        ));
        let err = TextToSpeechHandler::new(synthesizer)
            .handle(TextToSpeech {
                text: "Hello".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Synthesis(SynthesisError::StreamError(_))
        ));
    }

    #[tokio::test]
    async fn test_collect_empty_stream() {
        let audio = collect_chunks(stream::empty::<Result<Vec<u8>, SynthesisError>>().boxed()).await.unwrap();
        assert!(audio.is_empty());
    }

    #[tokio::test]
    async fn test_blank_text_rejected() {
        let synthesizer = Arc::new(FakeSynthesizer::with_chunks(vec![vec![1]]));
        let err = TextToSpeechHandler::new(synthesizer.clone())
            .handle(TextToSpeech {
                text: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(synthesizer.calls(), 0);
    }
}
