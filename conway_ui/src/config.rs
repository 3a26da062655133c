// config.rs - Startup settings for the Life window

use std::time::Duration;

use anyhow::ensure;
use conway::{Boundary, Viewport};
use egui::Color32;

/// Settings fixed for the lifetime of the window.
#[derive(Clone, Debug)]
pub struct Config {
    pub window_width_px: f32,
    pub window_height_px: f32,
    /// Side length of one square cell.
    pub cell_size_px: f32,
    /// Offscreen cells kept on each side of the visible grid.
    pub margin: usize,
    pub boundary: Boundary,
    /// Minimum time between two autoplay generations.
    pub step_interval: Duration,
    pub alive_color: Color32,
    pub dead_color: Color32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width_px: 800.0,
            window_height_px: 480.0,
            cell_size_px: 16.0,
            margin: 8,
            boundary: Boundary::Clamped,
            step_interval: Duration::from_millis(10),
            alive_color: Color32::WHITE,
            dead_color: Color32::BLACK,
        }
    }
}

impl Config {
    /// Visible cells that fit in the window.
    pub fn viewport(&self) -> anyhow::Result<Viewport> {
        ensure!(
            self.cell_size_px > 0.0,
            "cell size must be positive, got {}",
            self.cell_size_px
        );
        let width = (self.window_width_px / self.cell_size_px) as usize;
        let height = (self.window_height_px / self.cell_size_px) as usize;
        Viewport::new(width, height, self.margin)
    }

    /// Pixel size of the painted grid.
    pub fn grid_size_px(&self, viewport: Viewport) -> egui::Vec2 {
        egui::vec2(
            viewport.width as f32 * self.cell_size_px,
            viewport.height as f32 * self.cell_size_px,
        )
    }
}
