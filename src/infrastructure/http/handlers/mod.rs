//! HTTP Handlers

mod chat;
mod root;
mod upload;
mod voice;

pub use chat::*;
pub use root::*;
pub use upload::{read_audio_upload, AUDIO_FIELD};
pub use voice::*;
