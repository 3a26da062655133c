// main.rs - Conway's Game of Life window
//
// Keys: Space start/pause, S single step, R random fill, C clear, Esc quit.
// Click a cell to toggle it.

use anyhow::anyhow;
use eframe::egui;
use log::info;

mod config;
mod input;
mod ui;

use config::Config;
use ui::LifeApp;

// Room for the control panel above the grid
const CONTROLS_HEIGHT_PX: f32 = 40.0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let app = LifeApp::new(config.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width_px, config.window_height_px + CONTROLS_HEIGHT_PX]),
        ..Default::default()
    };

    info!("starting Game of Life");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window closed with error: {e}"))
}
