//! 应用层 - 命令
//!
//! 每个 HTTP 入口对应一个命令及其处理器

mod counselor_commands;

pub mod handlers;

pub use counselor_commands::*;
