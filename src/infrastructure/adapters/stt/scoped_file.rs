//! Scoped Audio File - 上传音频的作用域临时文件
//!
//! 文件名随机生成，并发请求之间不会冲突；
//! 值被 drop 时文件随之删除。

use std::path::Path;
use tempfile::TempPath;

use crate::application::ports::TranscriptionError;
use crate::domain::audio::UploadedAudio;

/// 作用域临时文件
#[derive(Debug)]
pub struct ScopedAudioFile {
    path: TempPath,
}

impl ScopedAudioFile {
    /// 在 `dir` 下创建唯一命名的文件并写入音频数据
    pub async fn create(dir: &Path, audio: &UploadedAudio) -> Result<Self, TranscriptionError> {
        let suffix = format!(".{}", audio.format().extension());
        let path = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&suffix)
            .tempfile_in(dir)
            .map_err(|e| {
                TranscriptionError::TempFileError(format!(
                    "Failed to create temp file in {}: {}",
                    dir.display(),
                    e
                ))
            })?
            .into_temp_path();

        // 写入失败时 path 被 drop，文件同样会被删除
        tokio::fs::write(&path, audio.data())
            .await
            .map_err(|e| TranscriptionError::TempFileError(format!("Failed to write audio: {}", e)))?;

        tracing::debug!(
            path = %path.display(),
            size = audio.len(),
            "Created scoped audio file"
        );

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScopedAudioFile {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "Removing scoped audio file");
    }
}
