//! image-fetch-rust
//!
//! 画像URLをダウンロードして表示用に保持し、JPEGで保存する。

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod flow;
pub mod logging;
pub mod persister;

pub use config::{Config, RunOverrides};
pub use error::{ImageFetchError, Result};
pub use fetcher::{HttpFetcher, ImageFetcher};
pub use flow::{FlowController, FlowOutcome, Session, SharedImage};
pub use persister::{ImagePersister, JpegFilePersister};
