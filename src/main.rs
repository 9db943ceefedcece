#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use torus_life::{App, Config, GridStore};

fn main() -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let grid = GridStore::new(Config::GRID_WIDTH, Config::GRID_HEIGHT)?;
    log::info!(
        "Conway's Game of Life on a {}x{} torus",
        Config::GRID_WIDTH,
        Config::GRID_HEIGHT
    );
    log::info!("Controls:");
    log::info!("  Left drag   - Paint live cells");
    log::info!("  Right drag  - Erase cells");
    log::info!("  Middle click - Toggle a cell");
    log::info!("  Space       - Next step");
    log::info!("  E           - Play / Pause");
    log::info!("  C           - Clear field");

    let field = vec2(Config::GRID_WIDTH as f32, Config::GRID_HEIGHT as f32) * Config::CELL_SIZE;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(
                field.x + Config::CONTROL_PANEL_WIDTH + 3. * Config::FRAME_MARGIN,
                field.y.max(Config::MIN_PANEL_HEIGHT) + 2. * Config::FRAME_MARGIN,
            ))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, grid)))),
    )
    .map_err(|e| anyhow!("Failed to open the window: {}", e))
}
