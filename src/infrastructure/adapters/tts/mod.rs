//! TTS Adapter - 语音合成客户端实现

mod elevenlabs_client;

pub use elevenlabs_client::{ElevenLabsClient, ElevenLabsClientConfig};
