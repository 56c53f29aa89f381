mod app;

use anyhow::{Context, Result};
use app::{configure_fonts, DesktopApp};
use image_fetch_rust::{logging, Config, FlowController};

fn main() -> Result<()> {
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let config = Config::load()?;
    let controller = FlowController::from_config(&config)?;
    let runtime = tokio::runtime::Runtime::new().context("tokio runtime")?;

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Image Downloader",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(DesktopApp::new(controller, runtime, config.locale))
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
