mod coord;
mod store;

pub use coord::{Bounds, Coord};
pub use store::{CellChange, GridStore};

/// Read/write contract of a bounded field whose edges are stitched together.
///
/// Every coordinate is accepted; implementations wrap it into their bounds.
pub trait ToroidalGrid {
    fn bounds(&self) -> Bounds;

    fn get(&self, coord: Coord) -> bool;

    fn set(&mut self, coord: Coord, state: bool);

    /// Snapshot of the live coordinates, normalized, in unspecified order.
    fn live_cells(&self) -> Vec<Coord>;

    fn generation(&self) -> u64;

    /// Called once after all cells of a new generation are written.
    fn finish_generation(&mut self);

    fn population(&self) -> usize {
        self.live_cells().len()
    }

    /// Flips the cell and returns its new state.
    fn toggle(&mut self, coord: Coord) -> bool {
        let state = !self.get(coord);
        self.set(coord, state);
        state
    }

    /// Fills the field with random cells
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    fn randomize(&mut self, fill_rate: f64, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let fill_rate = fill_rate.clamp(0., 1.);
        for coord in self.bounds().coords() {
            self.set(coord, rng.gen_bool(fill_rate));
        }
    }

    /// Row-by-row picture of the field, `#` for live cells and `.` for dead ones.
    fn to_ascii(&self) -> String {
        let bounds = self.bounds();
        let rows = bounds.height() as usize;
        let mut picture = String::with_capacity(bounds.area().unwrap_or(0) + rows);
        for y in 0..bounds.height() {
            picture.extend((0..bounds.width()).map(|x| {
                if self.get(Coord::new(x, y)) {
                    '#'
                } else {
                    '.'
                }
            }));
            picture.push('\n');
        }
        picture
    }

    /// Returns multiline string reporting field stats.
    fn stats(&self) -> String {
        let bounds = self.bounds();
        format!(
            "Field: {}x{} (torus)\nGeneration: {}\nPopulation: {}",
            bounds.width(),
            bounds.height(),
            self.generation(),
            self.population(),
        )
    }
}
