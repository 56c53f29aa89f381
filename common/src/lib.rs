//! Image Fetch Common Library
//!
//! CLIとデスクトップで共有される状態・メッセージ

pub mod error;
pub mod messages;
pub mod state;

pub use error::{Error, FailureKind, Result};
pub use messages::{Locale, StatusMessage, UiText};
pub use state::{Completion, SessionState, TriggerId};
