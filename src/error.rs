use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageFetchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("URLが不正です: {0}")]
    InvalidUrl(String),

    #[error("HTTPエラー: ステータス {0}")]
    HttpStatus(u16),

    #[error("通信エラー: {0}")]
    Network(#[from] reqwest::Error),

    #[error("画像デコードエラー: {0}")]
    Decode(String),

    #[error("画像エンコードエラー: {0}")]
    Encode(String),

    #[error("データディレクトリが見つかりません")]
    DataDirNotFound,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("バックグラウンド処理エラー: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ImageFetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        ImageFetchError::Task(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ImageFetchError>;
