mod app;
mod color;
mod data;
mod dispatch;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::LaunchDashApp;
use eframe::egui;

/// Default dataset location; override with the first CLI argument.
const DEFAULT_DATA_PATH: &str = "data/spacex_launch_dash.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    // The dataset is loaded exactly once; a bad file aborts startup.
    let dataset = data::loader::load_csv(&path)
        .context("failed to load launch records")?;
    log::info!(
        "Loaded {} launch records from {} ({} sites, payload {:.0} to {:.0} kg)",
        dataset.len(),
        path.display(),
        dataset.sites.len(),
        dataset.payload_min,
        dataset.payload_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
