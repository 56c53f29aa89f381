//! ユーザー向けメッセージとロケール
//!
//! 失敗の種類からメッセージへの変換はUIに依存しない純粋関数として持つ。

use crate::error::{Error, FailureKind};
use serde::{Deserialize, Serialize};

/// 表示言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
    Ru,
}

impl std::str::FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ja => write!(f, "ja"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

/// 一連の処理が終わったときに表示する結果メッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusMessage {
    ImageSaved,
    DownloadFailed,
    SaveFailed,
}

impl StatusMessage {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (StatusMessage::ImageSaved, Locale::En) => "image saved",
            (StatusMessage::ImageSaved, Locale::Ja) => "画像を保存しました",
            (StatusMessage::ImageSaved, Locale::Ru) => "Изображение сохранено",
            (StatusMessage::DownloadFailed, Locale::En) => "download failed",
            (StatusMessage::DownloadFailed, Locale::Ja) => "画像のダウンロードに失敗しました",
            (StatusMessage::DownloadFailed, Locale::Ru) => "Ошибка загрузки изображения",
            (StatusMessage::SaveFailed, Locale::En) => "save failed",
            (StatusMessage::SaveFailed, Locale::Ja) => "画像の保存に失敗しました",
            (StatusMessage::SaveFailed, Locale::Ru) => "Ошибка сохранения изображения",
        }
    }

    pub fn is_success(self) -> bool {
        self == StatusMessage::ImageSaved
    }
}

impl From<FailureKind> for StatusMessage {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Download => StatusMessage::DownloadFailed,
            FailureKind::Save => StatusMessage::SaveFailed,
        }
    }
}

/// 画面のラベル文字列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub url_label: &'static str,
    pub download_button: &'static str,
    pub image_description: &'static str,
}

impl UiText {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => UiText {
                url_label: "Enter image URL",
                download_button: "Download image",
                image_description: "Downloaded image",
            },
            Locale::Ja => UiText {
                url_label: "画像のURLを入力",
                download_button: "画像をダウンロード",
                image_description: "ダウンロードした画像",
            },
            Locale::Ru => UiText {
                url_label: "Введите URL изображения",
                download_button: "Загрузить изображение",
                image_description: "Загруженное изображение",
            },
        }
    }
}
