//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown locale: {0}. Use en, ja, or ru")]
    UnknownLocale(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 失敗の種類（ユーザーに見せる区別はこの2つだけ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// 通信・デコードの失敗
    Download,
    /// ファイル書き込み・エンコードの失敗
    Save,
}
