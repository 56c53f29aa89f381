use clap::Parser;
use image_fetch_common::StatusMessage;
use image_fetch_rust::{cli, config, error, logging, FlowController, FlowOutcome};
use cli::{Cli, Commands};
use config::{Config, RunOverrides};
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_logging_stderr();
    } else if let Err(err) = logging::init_logging() {
        eprintln!("ログファイルを開けません（標準エラーに出力します）: {}", err);
        logging::init_logging_stderr();
    }

    let mut config = Config::load()?;

    match cli.command {
        Commands::Fetch { url, output_dir, file_name, quality } => {
            let config = config.with_overrides(&RunOverrides {
                locale: cli.locale,
                output_dir,
                file_name,
                jpeg_quality: quality,
            });

            let target = config.target_path()?;
            let controller = FlowController::from_config(&config)?;
            controller.set_url(url);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(controller.snapshot().url().to_string());
            spinner.enable_steady_tick(Duration::from_millis(100));

            let mut task = controller.trigger(&tokio::runtime::Handle::current());
            let outcome = tokio::select! {
                joined = &mut task => joined?,
                _ = tokio::signal::ctrl_c() => {
                    controller.shutdown();
                    task.await?
                }
            };
            spinner.finish_and_clear();

            let state = controller.snapshot();
            match outcome {
                FlowOutcome::Finished(message) => {
                    println!("{}", message.text(config.locale));
                    if let Some(image) = state.image() {
                        println!("  サイズ: {}x{}", image.width(), image.height());
                    }
                    if message == StatusMessage::ImageSaved {
                        println!("  保存先: {}", target.display());
                    } else {
                        std::process::exit(1);
                    }
                }
                FlowOutcome::Rejected | FlowOutcome::Cancelled => {
                    println!("中断しました");
                    std::process::exit(130);
                }
            }
        }

        Commands::Config { set_output_dir, set_locale, set_timeout, show } => {
            // --locale はこの実行の表示だけに使い、保存する設定には混ぜない
            let mut changed = false;

            if let Some(dir) = set_output_dir {
                config.output_dir = Some(dir);
                changed = true;
            }
            if let Some(locale) = set_locale {
                config.locale = locale;
                changed = true;
            }
            if let Some(secs) = set_timeout {
                config.timeout_seconds = if secs == 0 { None } else { Some(secs) };
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  保存先: {}", config.target_path()?.display());
                println!("  JPEG品質: {}", config.quality());
                println!("  言語: {}", config.locale);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: 既定"),
                }
            }
        }

        Commands::Path => {
            println!("{}", config.target_path()?.display());
        }
    }

    Ok(())
}
