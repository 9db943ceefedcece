#![warn(clippy::all)]

mod grid;
mod gui;
mod naive;
mod rules;

pub use grid::{Bounds, CellChange, Coord, GridStore, ToroidalGrid};
pub use gui::{App, Config, Settings};
pub use naive::NaiveGrid;
pub use rules::{Changeset, RuleEngine};
