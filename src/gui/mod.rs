mod app;
mod config;
mod draw;
mod input;
mod pacing;

pub use app::App;
pub use config::{Config, Settings};
use input::{cell_at, PaintButton};
use pacing::{FpsLimiter, TickClock};
