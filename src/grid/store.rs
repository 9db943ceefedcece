use super::{Bounds, Coord, ToroidalGrid};
use ahash::AHashSet;
use anyhow::Result;

/// A single cell transition, recorded so that a renderer can patch its
/// picture instead of redrawing the whole field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub coord: Coord,
    pub alive: bool,
}

/// Toroidal field stored as the set of its live coordinates.
///
/// Memory and per-step cost follow the population, not the area, so the
/// bounds may be as large as `i64` allows.
///
/// Invariant: every coordinate in `live` is normalized.
#[derive(Clone, Debug)]
pub struct GridStore {
    bounds: Bounds,
    live: AHashSet<Coord>,
    generation: u64,
    journal: Option<Vec<CellChange>>,
}

impl GridStore {
    /// Creates a dead field. Fails if either dimension is not positive.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let bounds = Bounds::new(width, height)?;
        Ok(Self {
            bounds,
            live: AHashSet::new(),
            generation: 0,
            journal: None,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn normalize(&self, coord: Coord) -> Coord {
        self.bounds.normalize(coord)
    }

    pub fn get(&self, coord: Coord) -> bool {
        self.live.contains(&self.bounds.normalize(coord))
    }

    pub fn set(&mut self, coord: Coord, state: bool) {
        let coord = self.bounds.normalize(coord);
        let changed = if state {
            self.live.insert(coord)
        } else {
            self.live.remove(&coord)
        };
        if !changed {
            return;
        }
        if let Some(journal) = self.journal.as_mut() {
            journal.push(CellChange {
                coord,
                alive: state,
            });
        }
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        let state = !self.get(coord);
        self.set(coord, state);
        state
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Coord> {
        self.live.iter()
    }

    pub fn live_cells(&self) -> Vec<Coord> {
        self.live.iter().copied().collect()
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Kills every live cell and rewinds the generation counter.
    ///
    /// Only live cells are visited, the rest of the field is already dead.
    pub fn reset(&mut self) {
        for coord in self.live.drain() {
            if let Some(journal) = self.journal.as_mut() {
                journal.push(CellChange {
                    coord,
                    alive: false,
                });
            }
        }
        self.generation = 0;
    }

    /// Starts or stops recording [`CellChange`]s. Stopping drops pending ones.
    pub fn set_change_tracking(&mut self, enabled: bool) {
        match (enabled, self.journal.is_some()) {
            (true, false) => self.journal = Some(Vec::new()),
            (false, true) => self.journal = None,
            _ => {}
        }
    }

    /// Takes the transitions recorded since the previous call, oldest first.
    pub fn drain_changes(&mut self) -> Vec<CellChange> {
        self.journal.as_mut().map(std::mem::take).unwrap_or_default()
    }

    #[cfg(test)]
    pub(super) fn assert_consistent(&self) {
        for &coord in &self.live {
            assert!(self.bounds.contains(coord), "{:?} is not normalized", coord);
        }
        // a full scan is only affordable on small fields
        if self.bounds.area().is_some_and(|area| area <= 1 << 16) {
            let scanned = self
                .bounds
                .coords()
                .filter(|&c| self.get(c))
                .collect::<AHashSet<_>>();
            assert_eq!(scanned, self.live);
        }
    }
}

impl ToroidalGrid for GridStore {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn get(&self, coord: Coord) -> bool {
        GridStore::get(self, coord)
    }

    fn set(&mut self, coord: Coord, state: bool) {
        GridStore::set(self, coord, state)
    }

    fn live_cells(&self) -> Vec<Coord> {
        GridStore::live_cells(self)
    }

    fn population(&self) -> usize {
        self.live.len()
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn finish_generation(&mut self) {
        self.generation += 1;
    }
}
