//! STT Adapter - 语音转文字客户端实现

mod assemblyai_client;
mod scoped_file;

pub use assemblyai_client::{AssemblyAiClient, AssemblyAiClientConfig};
pub use scoped_file::ScopedAudioFile;
