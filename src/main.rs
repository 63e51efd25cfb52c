mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use app::WorkforceApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dataset ships with the deployment; without it there is nothing to show.
    let table = data::loader::load_dataset(&config.dataset_path).inspect_err(|e| {
        log::error!("{e}");
    })?;
    let table = Arc::new(table);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let side_panel_width = config.side_panel_width;
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(WorkforceApp::new(table, side_panel_width)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
