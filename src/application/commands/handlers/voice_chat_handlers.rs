//! Voice Chat Command Handler
//!
//! 转写 → 生成 → 合成，严格顺序执行。任一阶段失败即中止，
//! 后续阶段不会被调用，已得到的中间结果丢弃。

use std::sync::Arc;

use crate::application::commands::{Chat, Transcribe, TextToSpeech, VoiceChat};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesizerPort, TextGeneratorPort, TranscriberPort};
use crate::domain::counseling::PromptTemplate;

use super::{ChatHandler, SynthesizedAudio, TextToSpeechHandler, TranscribeHandler};

/// 语音对话结果
#[derive(Debug, Clone)]
pub struct VoiceChatResult {
    pub transcription: String,
    pub reply: String,
    pub audio: SynthesizedAudio,
}

/// VoiceChat Handler
pub struct VoiceChatHandler {
    transcribe: TranscribeHandler,
    chat: ChatHandler,
    text_to_speech: TextToSpeechHandler,
}

impl VoiceChatHandler {
    pub fn new(
        transcriber: Arc<dyn TranscriberPort>,
        generator: Arc<dyn TextGeneratorPort>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        template: PromptTemplate,
    ) -> Self {
        Self {
            transcribe: TranscribeHandler::new(transcriber),
            chat: ChatHandler::new(generator, template),
            text_to_speech: TextToSpeechHandler::new(synthesizer),
        }
    }

    pub async fn handle(&self, command: VoiceChat) -> Result<VoiceChatResult, ApplicationError> {
        let transcription = self
            .transcribe
            .handle(Transcribe {
                audio: command.audio,
            })
            .await
            .inspect_err(|e| tracing::warn!(stage = e.stage(), error = %e, "Voice chat aborted"))?
            .text;

        let reply = self
            .chat
            .handle(Chat {
                message: transcription.clone(),
            })
            .await
            .inspect_err(|e| tracing::warn!(stage = e.stage(), error = %e, "Voice chat aborted"))?
            .reply;

        let audio = self
            .text_to_speech
            .handle(TextToSpeech {
                text: reply.clone(),
            })
            .await
            .inspect_err(|e| tracing::warn!(stage = e.stage(), error = %e, "Voice chat aborted"))?;

        tracing::info!(
            transcription_len = transcription.len(),
            reply_len = reply.len(),
            audio_size = audio.audio_data.len(),
            "Voice chat completed"
        );

        Ok(VoiceChatResult {
            transcription,
            reply,
            audio,
        })
    }
}
