//! Audio Context - Value Objects

use std::path::Path;

/// 上传音频的格式（依据文件扩展名判断）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Wav,
    Mp3,
    Flac,
    Ogg,
    Webm,
    M4a,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            "m4a" | "mp4" => Some(Self::M4a),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
            Self::M4a => "m4a",
        }
    }
}

/// 上传的音频
///
/// 不变量:
/// - 只存在于单次请求内
/// - data 为客户端上传的原始字节，不做解码
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    data: Vec<u8>,
    file_name: Option<String>,
    content_type: Option<String>,
}

impl UploadedAudio {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// 推断音频格式，无法识别时按 WAV 处理
    pub fn format(&self) -> AudioFormat {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .and_then(AudioFormat::from_extension)
            .unwrap_or_default()
    }
}
