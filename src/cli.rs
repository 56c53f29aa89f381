use clap::{Parser, Subcommand};
use image_fetch_common::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-fetch")]
#[command(about = "画像URLからダウンロードしてJPEG保存するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを標準エラーに出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 表示言語 (en/ja/ru)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をダウンロードして保存
    Fetch {
        /// 画像のURL
        #[arg(required = true)]
        url: String,

        /// 保存先ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// 保存ファイル名（省略時は downloaded_image.jpg）
        #[arg(short, long)]
        file_name: Option<String>,

        /// JPEG品質 (1-100)
        #[arg(short, long)]
        quality: Option<u8>,
    },

    /// 設定を表示/編集
    Config {
        /// 保存先ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 表示言語を設定 (en/ja/ru)
        #[arg(long)]
        set_locale: Option<Locale>,

        /// タイムアウト秒数を設定（0で解除）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 保存先ファイルのパスを表示
    Path,
}
