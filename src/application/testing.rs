//! 测试用的端口假实现
//!
//! 每个假实现都记录调用次数，便于断言流水线的阶段顺序

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{
    GenerationError, SpeechStream, SpeechSynthesizerPort, SynthesisError, TextGeneratorPort,
    TranscriberPort, TranscriptionError,
};
use crate::domain::audio::UploadedAudio;

pub struct FakeTranscriber {
    outcome: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeTranscriber {
    pub fn returning(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriberPort for FakeTranscriber {
    async fn transcribe(&self, _audio: &UploadedAudio) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(TranscriptionError::ServiceError(message.clone())),
        }
    }
}

enum GeneratorBehavior {
    Reply(Option<String>),
    Fail(String),
    /// 提示词中包含 "software engineer" 时给出推荐
    Counselor,
}

pub struct FakeGenerator {
    behavior: GeneratorBehavior,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeGenerator {
    fn with_behavior(behavior: GeneratorBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::with_behavior(GeneratorBehavior::Reply(Some(text.to_string())))
    }

    pub fn without_text() -> Self {
        Self::with_behavior(GeneratorBehavior::Reply(None))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_behavior(GeneratorBehavior::Fail(message.to_string()))
    }

    pub fn counselor() -> Self {
        Self::with_behavior(GeneratorBehavior::Counselor)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGeneratorPort for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.behavior {
            GeneratorBehavior::Reply(reply) => Ok(reply.clone()),
            GeneratorBehavior::Fail(message) => Err(GenerationError::ServiceError(message.clone())),
            GeneratorBehavior::Counselor => {
                if prompt.contains("software engineer") {
                    Ok(Some(
                        "  Great interests! Based on what you shared, I'd encourage you to become a software engineer.  "
                            .to_string(),
                    ))
                } else {
                    Ok(Some("Tell me more about yourself.".to_string()))
                }
            }
        }
    }
}

pub struct FakeSynthesizer {
    chunks: Vec<Vec<u8>>,
    fail: Option<String>,
    break_after: Option<usize>,
    calls: AtomicUsize,
}

impl FakeSynthesizer {
    pub fn with_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks,
            fail: None,
            break_after: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            chunks: Vec::new(),
            fail: Some(message.to_string()),
            break_after: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// 输出 n 个分块后流中断
    pub fn breaking_after(chunks: Vec<Vec<u8>>, n: usize) -> Self {
        Self {
            break_after: Some(n),
            ..Self::with_chunks(chunks)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<SpeechStream, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail {
            return Err(SynthesisError::ServiceError(message.clone()));
        }

        let mut items: Vec<Result<Vec<u8>, SynthesisError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        if let Some(n) = self.break_after {
            items.truncate(n);
            items.push(Err(SynthesisError::StreamError("connection reset".to_string())));
        }

        Ok(SpeechStream {
            content_type: "audio/mpeg".to_string(),
            chunks: stream::iter(items).boxed(),
        })
    }
}
