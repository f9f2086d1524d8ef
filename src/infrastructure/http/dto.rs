//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// GET / 响应
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

#[derive(Debug, Serialize)]
pub struct VoiceChatResponse {
    pub transcription: String,
    pub response: String,
    /// 合成音频的十六进制编码（小写）
    pub audio_data: String,
}

/// 将字节编码为小写十六进制字符串
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // 写入 String 不会失败
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[]), "");
        assert_eq!(encode_hex(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
        assert_eq!(encode_hex(b"ID3").len(), 6);
    }

    #[test]
    fn test_chat_response_omits_missing_audio_url() {
        let json = serde_json::to_value(ChatResponse {
            response: "hi".to_string(),
            audio_url: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"response": "hi"}));
    }
}
