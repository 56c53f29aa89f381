//! ダウンロード→保存の一連の流れを制御する
//!
//! 状態の派生フィールド（画像・読み込み中・メッセージ）を書くのはここだけ。
//! 保存の完了を待ってからメッセージを設定する。実行中の再トリガーは拒否する。

use std::sync::{Arc, Mutex, MutexGuard};

use image::DynamicImage;
use image_fetch_common::{Completion, SessionState, StatusMessage, TriggerId};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::{HttpFetcher, ImageFetcher};
use crate::persister::{ImagePersister, JpegFilePersister};

pub type SharedImage = Arc<DynamicImage>;
pub type Session = SessionState<SharedImage>;

/// 1回のトリガーの結末
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 最後まで実行し、このメッセージを設定した
    Finished(StatusMessage),
    /// 別の処理が実行中だったため何もしなかった
    Rejected,
    /// 所有者の終了によって打ち切られた
    Cancelled,
}

/// 安価に複製できるハンドル。複製はすべて同じ状態を共有する。
#[derive(Clone)]
pub struct FlowController {
    state: Arc<Mutex<Session>>,
    fetcher: Arc<dyn ImageFetcher>,
    persister: Arc<dyn ImagePersister>,
    cancel: CancellationToken,
}

impl FlowController {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, persister: Arc<dyn ImagePersister>) -> Self {
        Self {
            state: Arc::new(Mutex::new(Session::new())),
            fetcher,
            persister,
            cancel: CancellationToken::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout())?;
        let persister = JpegFilePersister::from_config(config)?;
        Ok(Self::new(Arc::new(fetcher), Arc::new(persister)))
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // 状態更新中にpanicしても値自体は一貫しているので使い続ける
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_url(&self, url: impl Into<String>) {
        self.lock().set_url(url);
    }

    /// 描画用のスナップショット
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// 現在入力されているURLで処理を起動する
    pub fn trigger(&self, runtime: &tokio::runtime::Handle) -> JoinHandle<FlowOutcome> {
        let controller = self.clone();
        let url = self.lock().url().to_string();
        runtime.spawn(async move { controller.run_download_and_save(&url).await })
    }

    /// 実行中の処理を打ち切り、以降のトリガーも受け付けない
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub async fn run_download_and_save(&self, url: &str) -> FlowOutcome {
        if self.is_shut_down() {
            return FlowOutcome::Cancelled;
        }

        let begun = self.lock().begin();
        let Some(id) = begun else {
            tracing::warn!(url, "download already in progress, trigger rejected");
            return FlowOutcome::Rejected;
        };
        tracing::info!(trigger = id, url, "download started");

        let fetched = tokio::select! {
            _ = self.cancel.cancelled() => return self.abandon(id),
            result = self.fetcher.fetch(url) => result,
        };

        let image = match fetched {
            Ok(image) => Arc::new(image),
            Err(err) => {
                tracing::warn!(trigger = id, url, error = %err, "download failed");
                return self.finish(id, Completion::DownloadFailed);
            }
        };
        tracing::info!(
            trigger = id,
            width = image.width(),
            height = image.height(),
            "image decoded"
        );

        let saved = tokio::select! {
            _ = self.cancel.cancelled() => return self.abandon(id),
            result = self.persister.save(image.clone()) => result,
        };

        let completion = match saved {
            Ok(path) => {
                tracing::info!(trigger = id, path = %path.display(), "image saved");
                Completion::Saved(image)
            }
            Err(err) => {
                tracing::warn!(trigger = id, error = %err, "save failed");
                Completion::SaveFailed(image)
            }
        };
        self.finish(id, completion)
    }

    fn finish(&self, id: TriggerId, completion: Completion<SharedImage>) -> FlowOutcome {
        let message = completion.message();
        if self.lock().complete(id, completion) {
            FlowOutcome::Finished(message)
        } else {
            tracing::debug!(trigger = id, "stale result discarded");
            FlowOutcome::Cancelled
        }
    }

    fn abandon(&self, id: TriggerId) -> FlowOutcome {
        self.lock().abandon(id);
        tracing::info!(trigger = id, "download cancelled");
        FlowOutcome::Cancelled
    }
}

impl std::fmt::Debug for FlowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("FlowController")
            .field("url", &state.url())
            .field("loading", &state.is_loading())
            .field("message", &state.message())
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}
