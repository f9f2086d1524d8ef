//! Transcribe Command Handler

use std::sync::Arc;

use crate::application::commands::Transcribe;
use crate::application::error::ApplicationError;
use crate::application::ports::{TranscriberPort, TranscriptionError};

/// 转写结果
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    pub text: String,
}

/// Transcribe Handler
pub struct TranscribeHandler {
    transcriber: Arc<dyn TranscriberPort>,
}

impl TranscribeHandler {
    pub fn new(transcriber: Arc<dyn TranscriberPort>) -> Self {
        Self { transcriber }
    }

    pub async fn handle(&self, command: Transcribe) -> Result<TranscriptionResult, ApplicationError> {
        let audio = command.audio;
        if audio.is_empty() {
            return Err(ApplicationError::validation("Audio file is empty"));
        }

        let text = self.transcriber.transcribe(&audio).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(TranscriptionError::NoSpeech.into());
        }

        tracing::info!(
            audio_size = audio.len(),
            format = audio.format().extension(),
            text_len = text.len(),
            "Audio transcribed"
        );

        Ok(TranscriptionResult {
            text: text.to_string(),
        })
    }
}
