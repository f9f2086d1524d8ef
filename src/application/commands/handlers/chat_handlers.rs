//! Chat Command Handler
//!
//! 将用户文本填入固定提示词，调用一次文本生成服务

use std::sync::Arc;

use crate::application::commands::Chat;
use crate::application::error::ApplicationError;
use crate::application::ports::TextGeneratorPort;
use crate::domain::counseling::{PromptTemplate, FALLBACK_REPLY};

/// 对话回复
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
}

/// Chat Handler
pub struct ChatHandler {
    generator: Arc<dyn TextGeneratorPort>,
    template: PromptTemplate,
}

impl ChatHandler {
    pub fn new(generator: Arc<dyn TextGeneratorPort>, template: PromptTemplate) -> Self {
        Self {
            generator,
            template,
        }
    }

    pub async fn handle(&self, command: Chat) -> Result<ChatReply, ApplicationError> {
        if command.message.trim().is_empty() {
            return Err(ApplicationError::validation("Message is required"));
        }

        let prompt = self.template.render(&command.message);
        let generated = self.generator.generate(&prompt).await?;

        let reply = match generated
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
        {
            Some(reply) => reply,
            None => {
                tracing::warn!("Model response had no text, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        tracing::info!(
            message_len = command.message.len(),
            reply_len = reply.len(),
            "Chat reply generated"
        );

        Ok(ChatReply { reply })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GenerationError;
    use crate::application::testing::FakeGenerator;

    fn handler(generator: Arc<FakeGenerator>) -> ChatHandler {
        ChatHandler::new(generator, PromptTemplate::career_counselor().unwrap())
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let generator = Arc::new(FakeGenerator::returning("\n  Hello there!  \n"));
        let reply = handler(generator.clone())
            .handle(Chat {
                message: "hi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(reply.reply, "Hello there!");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_message_is_substituted_into_prompt() {
        let generator = Arc::new(FakeGenerator::returning("ok"));
        handler(generator.clone())
            .handle(Chat {
                message: "I enjoy painting".to_string(),
            })
            .await
            .unwrap();

        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("Student says: \"I enjoy painting\""));
        assert!(prompt.trim_end().ends_with("Bot Reply:"));
    }

    #[tokio::test]
    async fn test_missing_text_uses_fallback() {
        let generator = Arc::new(FakeGenerator::without_text());
        let reply = handler(generator)
            .handle(Chat {
                message: "hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(reply.reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_whitespace_reply_uses_fallback() {
        let generator = Arc::new(FakeGenerator::returning("   \n "));
        let reply = handler(generator)
            .handle(Chat {
                message: "hello".to_string(),
            })
            .await
            .unwrap();
        assert!(!reply.reply.is_empty());
        assert_eq!(reply.reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_provider_failure_is_generation_error() {
        let generator = Arc::new(FakeGenerator::failing("quota exceeded"));
        let err = handler(generator)
            .handle(Chat {
                message: "hello".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Generation(GenerationError::ServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_message_rejected_without_calling_model() {
        let generator = Arc::new(FakeGenerator::returning("unused"));
        let err = handler(generator.clone())
            .handle(Chat {
                message: "   ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(generator.calls(), 0);
    }
}
