//! セッション状態
//!
//! 画面1枚ぶんの状態（URL・画像・読み込み中フラグ・メッセージ）を保持する。
//! 画像の型は呼び出し側が決める（共通クレートはコーデックに依存しない）。

use crate::error::FailureKind;
use crate::messages::StatusMessage;

/// 1回のダウンロード要求を識別するID
pub type TriggerId = u64;

/// 処理完了時に状態へ反映する結果
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<I> {
    /// ダウンロードと保存の両方に成功
    Saved(I),
    /// ダウンロードは成功したが保存に失敗
    SaveFailed(I),
    /// ダウンロード（またはデコード）に失敗
    DownloadFailed,
}

impl<I> Completion<I> {
    pub fn message(&self) -> StatusMessage {
        match self {
            Completion::Saved(_) => StatusMessage::ImageSaved,
            Completion::SaveFailed(_) => StatusMessage::from(FailureKind::Save),
            Completion::DownloadFailed => StatusMessage::from(FailureKind::Download),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState<I> {
    url: String,
    image: Option<I>,
    image_revision: u64,
    loading: bool,
    message: Option<StatusMessage>,
    active: Option<TriggerId>,
    next_trigger: TriggerId,
}

impl<I> Default for SessionState<I> {
    fn default() -> Self {
        Self {
            url: String::new(),
            image: None,
            image_revision: 0,
            loading: false,
            message: None,
            active: None,
            next_trigger: 1,
        }
    }
}

impl<I> SessionState<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 入力欄の変更（キー入力ごと）
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// 画像が差し替わるたびに増える
    pub fn image_revision(&self) -> u64 {
        self.image_revision
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<StatusMessage> {
        self.message
    }

    pub fn active_trigger(&self) -> Option<TriggerId> {
        self.active
    }

    /// 処理を開始する。実行中なら `None` を返し状態は変えない。
    pub fn begin(&mut self) -> Option<TriggerId> {
        if self.active.is_some() {
            return None;
        }
        let id = self.next_trigger;
        self.next_trigger += 1;
        self.active = Some(id);
        self.loading = true;
        self.message = None;
        Some(id)
    }

    /// 結果を反映する。IDが現在の処理と一致しなければ破棄して `false`。
    pub fn complete(&mut self, id: TriggerId, completion: Completion<I>) -> bool {
        if self.active != Some(id) {
            return false;
        }
        self.message = Some(completion.message());
        match completion {
            Completion::Saved(image) | Completion::SaveFailed(image) => {
                self.image = Some(image);
                self.image_revision += 1;
            }
            Completion::DownloadFailed => {}
        }
        self.active = None;
        self.loading = false;
        true
    }

    /// 結果を出さずに処理を打ち切る（キャンセル時）。
    pub fn abandon(&mut self, id: TriggerId) -> bool {
        if self.active != Some(id) {
            return false;
        }
        self.active = None;
        self.loading = false;
        true
    }
}
