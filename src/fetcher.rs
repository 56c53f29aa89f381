//! 画像取得モジュール
//!
//! URLへGETを1回送り、レスポンス本文を画像としてデコードする。
//! 形式（JPEG/PNGなど）は内容から自動判定する。

use crate::error::{ImageFetchError, Result};
use image::DynamicImage;
use std::time::Duration;

#[async_trait::async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<DynamicImage>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// `timeout` が `None` ならクライアント既定のまま
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| ImageFetchError::InvalidUrl(format!("{url:?}: {err}")))?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<DynamicImage> {
        let result = match self.download(url).await {
            Ok(bytes) => {
                tracing::debug!(url, bytes = bytes.len(), "downloaded");
                decode_image(bytes).await
            }
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            tracing::debug!(url, error = %err, "fetch failed");
        }
        result
    }
}

/// デコードはブロッキングプールで行う
pub async fn decode_image(bytes: Vec<u8>) -> Result<DynamicImage> {
    tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes).map_err(|e| ImageFetchError::Decode(e.to_string()))
    })
    .await?
}
