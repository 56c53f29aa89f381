//! 画像保存モジュール
//!
//! 固定パスへJPEGで書き出す。一時ファイルに書いてから置き換えるので、
//! 同じパスへの再保存は上書きになり、書きかけのファイルは残らない。

use crate::config::Config;
use crate::error::{ImageFetchError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

#[async_trait::async_trait]
pub trait ImagePersister: Send + Sync {
    /// 保存して書き込んだパスを返す
    async fn save(&self, image: Arc<DynamicImage>) -> Result<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct JpegFilePersister {
    dir: PathBuf,
    file_name: String,
    quality: u8,
}

impl JpegFilePersister {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>, quality: u8) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            quality: quality.clamp(1, 100),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let target = config.target_path()?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ImageFetchError::Config("保存先が不正です".into()))?;
        Ok(Self::new(dir, config.file_name.clone(), config.quality()))
    }

    pub fn target_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[async_trait::async_trait]
impl ImagePersister for JpegFilePersister {
    async fn save(&self, image: Arc<DynamicImage>) -> Result<PathBuf> {
        let dir = self.dir.clone();
        let target = self.target_path();
        let quality = self.quality;

        tokio::task::spawn_blocking(move || write_jpeg(&image, &dir, &target, quality)).await?
    }
}

/// 書き込み本体（同期）
pub fn write_jpeg(image: &DynamicImage, dir: &Path, target: &Path, quality: u8) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // JPEGはアルファを持てないのでRGBへ
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        rgb.write_with_encoder(encoder)
            .map_err(|e| ImageFetchError::Encode(e.to_string()))?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(target).map_err(|e| ImageFetchError::Io(e.error))?;
    tracing::debug!(path = %target.display(), "image written");
    Ok(target.to_path_buf())
}
