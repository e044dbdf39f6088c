//! Connect-five GUI
//!
//! Play Black against the computer on a 10x10 board.

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=info")))
        .init();

    let path = std::env::var_os("GOMOKU_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gomoku.toml"));
    let config = AppConfig::load_or_default(&path).unwrap_or_else(|err| {
        warn!(%err, "invalid config, using defaults");
        AppConfig::default()
    });
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([520.0, 400.0])
            .with_title("Connect Five"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Five",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}
