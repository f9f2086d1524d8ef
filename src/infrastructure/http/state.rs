//! Application State
//!
//! 持有四个入口的命令处理器；处理器之间只共享无状态的端口实现

use std::sync::Arc;

use crate::application::{
    ChatHandler, SpeechSynthesizerPort, TextGeneratorPort, TextToSpeechHandler,
    TranscribeHandler, TranscriberPort, VoiceChatHandler,
};
use crate::domain::counseling::PromptTemplate;

/// 应用状态
pub struct AppState {
    pub chat_handler: ChatHandler,
    pub transcribe_handler: TranscribeHandler,
    pub voice_chat_handler: VoiceChatHandler,
    pub text_to_speech_handler: TextToSpeechHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        transcriber: Arc<dyn TranscriberPort>,
        generator: Arc<dyn TextGeneratorPort>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        template: PromptTemplate,
    ) -> Self {
        Self {
            chat_handler: ChatHandler::new(generator.clone(), template.clone()),
            transcribe_handler: TranscribeHandler::new(transcriber.clone()),
            voice_chat_handler: VoiceChatHandler::new(
                transcriber,
                generator,
                synthesizer.clone(),
                template,
            ),
            text_to_speech_handler: TextToSpeechHandler::new(synthesizer),
        }
    }
}
