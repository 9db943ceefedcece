use eframe::egui::Color32;

pub struct Config;

impl Config {
    // A 1200x900 window with the field spanning 5%..95% of its width
    // and 5%..65% of its height, 10 px per cell.
    pub const GRID_WIDTH: i64 = 108;
    pub const GRID_HEIGHT: i64 = 54;
    pub const CELL_SIZE: f32 = 10.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 360.;
    pub const MIN_PANEL_HEIGHT: f32 = 600.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const GAP_ABOVE_STATS: f32 = 30.;

    pub const DEAD_CELL_COLORS: [Color32; 2] = [
        Color32::from_rgb(100, 100, 100),
        Color32::from_rgb(150, 150, 150),
    ];
    pub const LIVE_CELL_COLOR: Color32 = Color32::from_rgb(200, 200, 100);
    pub const OUTLINE_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
    pub const OUTLINE_WIDTH: f32 = 5.;

    pub const TICKS_PER_SECOND: f64 = 10.;
    pub const STEPS_PER_TICK: u32 = 1;
    pub const MAX_FPS: f64 = 60.;
    pub const FILL_RATE: f64 = 0.3;
}

/// Values adjustable from the control panel; `Default` restores [`Config`].
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub ticks_per_second: f64,
    pub steps_per_tick: u32,
    pub max_fps: f64,
    pub fill_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: Config::TICKS_PER_SECOND,
            steps_per_tick: Config::STEPS_PER_TICK,
            max_fps: Config::MAX_FPS,
            fill_rate: Config::FILL_RATE,
        }
    }
}
