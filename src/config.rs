use crate::error::{ImageFetchError, Result};
use image_fetch_common::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FILE_NAME: &str = "downloaded_image.jpg";
pub const DEFAULT_JPEG_QUALITY: u8 = 100;
const APP_DIR_NAME: &str = "image-fetch";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 保存先ディレクトリ（未設定ならアプリ専用のpicturesディレクトリ）
    pub output_dir: Option<PathBuf>,
    pub file_name: String,
    pub jpeg_quality: u8,
    pub locale: Locale,
    /// リクエストのタイムアウト（未設定ならクライアント既定）
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name: DEFAULT_FILE_NAME.into(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            locale: Locale::default(),
            timeout_seconds: None,
        }
    }
}

/// その実行だけに効く上書き。設定ファイルには書き戻さない
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub locale: Option<Locale>,
    pub output_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub jpeg_quality: Option<u8>,
}

impl Config {
    /// 上書きを適用した複製を返す（元の設定は変えない）
    pub fn with_overrides(&self, overrides: &RunOverrides) -> Config {
        let mut config = self.clone();
        if let Some(locale) = overrides.locale {
            config.locale = locale;
        }
        if let Some(dir) = &overrides.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(name) = &overrides.file_name {
            config.file_name = name.clone();
        }
        if let Some(q) = overrides.jpeg_quality {
            config.jpeg_quality = q;
        }
        config
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ImageFetchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join(APP_DIR_NAME).join("config.json"))
    }

    /// 保存先ディレクトリを解決
    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_pictures_dir(),
        }
    }

    /// 保存先ファイルのフルパス
    pub fn target_path(&self) -> Result<PathBuf> {
        if self.file_name.trim().is_empty() {
            return Err(ImageFetchError::Config("ファイル名が空です".into()));
        }
        Ok(self.output_dir()?.join(&self.file_name))
    }

    /// JPEG品質 (1-100)
    pub fn quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// アプリ専用の画像ディレクトリ
pub fn default_pictures_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or(ImageFetchError::DataDirNotFound)?;
    Ok(base.join(APP_DIR_NAME).join("pictures"))
}

/// ログ出力先ディレクトリ
pub fn default_log_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or(ImageFetchError::DataDirNotFound)?;
    Ok(base.join(APP_DIR_NAME).join("logs"))
}
