//! Secant studio: drag out a circle, then a line segment, and see where they meet.
//!
//! Mouse: left-drag draws. Keys: `R` resets, Backspace undoes, Esc quits.

mod app;
mod config;
mod readout;
mod scene;
mod tool;

use anyhow::Result;

use secant_engine::device::GpuInit;
use secant_engine::logging::{LoggingConfig, init_logging};
use secant_engine::window::Runtime;

use crate::app::StudioApp;
use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::default();
    log::info!("drag to draw a circle, then a line segment (R: reset, Backspace: undo, Esc: quit)");

    // Colors are authored as display values; a non-sRGB surface shows them unchanged.
    let gpu_init = GpuInit::default().with_srgb(false);

    Runtime::run(config.runtime(), gpu_init, StudioApp::new(config))
}
