use crate::grid::{Bounds, Coord, ToroidalGrid};
use anyhow::{anyhow, Result};

/// Dense double-buffered field that rescans every cell on each update.
///
/// Slow on sparse patterns, but simple enough to serve as a reference
/// for [`RuleEngine`](crate::RuleEngine).
#[derive(Clone, Debug)]
pub struct NaiveGrid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    bounds: Bounds,
    generation: u64,
}

impl NaiveGrid {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let bounds = Bounds::new(width, height)?;
        let size = bounds.area().ok_or_else(|| {
            anyhow!("Grid {}x{} is too large for a dense field", width, height)
        })?;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            bounds,
            generation: 0,
        })
    }

    fn index(&self, coord: Coord) -> usize {
        let Coord { x, y } = self.bounds.normalize(coord);
        (x + y * self.bounds.width()) as usize
    }

    fn at(&self, x: i64, y: i64) -> usize {
        self.cells_curr[(x + y * self.bounds.width()) as usize] as usize
    }

    fn count_neibs(&self, x: i64, y: i64) -> usize {
        let (w, h) = (self.bounds.width(), self.bounds.height());
        let x1 = if x == 0 { w - 1 } else { x - 1 };
        let x2 = if x == w - 1 { 0 } else { x + 1 };
        let y1 = if y == 0 { h - 1 } else { y - 1 };
        let y2 = if y == h - 1 { 0 } else { y + 1 };
        self.at(x1, y1)
            + self.at(x, y1)
            + self.at(x2, y1)
            + self.at(x1, y)
            + self.at(x2, y)
            + self.at(x1, y2)
            + self.at(x, y2)
            + self.at(x2, y2)
    }

    /// Advances the field `n` generations by scanning the whole area each time.
    pub fn update(&mut self, n: usize) {
        let w = self.bounds.width();
        for _ in 0..n {
            for y in 0..self.bounds.height() {
                for x in 0..w {
                    let neibs = self.count_neibs(x, y);
                    let idx = (x + y * w) as usize;
                    self.cells_next[idx] = if self.cells_curr[idx] {
                        neibs == 2 || neibs == 3
                    } else {
                        neibs == 3
                    };
                }
            }
            std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
            self.generation += 1;
        }
    }
}

impl ToroidalGrid for NaiveGrid {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn get(&self, coord: Coord) -> bool {
        self.cells_curr[self.index(coord)]
    }

    fn set(&mut self, coord: Coord, state: bool) {
        let idx = self.index(coord);
        self.cells_curr[idx] = state;
    }

    fn live_cells(&self) -> Vec<Coord> {
        self.bounds
            .coords()
            .zip(self.cells_curr.iter())
            .filter_map(|(coord, &alive)| alive.then_some(coord))
            .collect()
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn finish_generation(&mut self) {
        self.generation += 1;
    }
}
