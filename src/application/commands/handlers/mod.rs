//! Command Handlers 实现

mod chat_handlers;
mod speech_handlers;
mod transcribe_handlers;
mod voice_chat_handlers;

pub use chat_handlers::*;
pub use speech_handlers::*;
pub use transcribe_handlers::*;
pub use voice_chat_handlers::*;
