mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};
use eframe::egui;

use app::DashboardApp;
use config::DashboardConfig;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    // Nothing to show without the dataset.
    let table = data::loader::load()
        .inspect_err(|e| log::error!("{e}"))
        .context("loading document metadata")?;

    let config = DashboardConfig::default();
    let state = AppState::new(table);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(state, config)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
