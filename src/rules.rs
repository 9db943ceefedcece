use crate::grid::{Coord, ToroidalGrid};
use ahash::AHashSet;

/// Births and deaths of one generation, computed before any cell is touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changeset {
    pub births: Vec<Coord>,
    pub deaths: Vec<Coord>,
}

impl Changeset {
    pub fn is_empty(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }

    /// Writes the flips into `grid`. Births and deaths are disjoint,
    /// so the order of application does not matter.
    pub fn apply<G: ToroidalGrid + ?Sized>(&self, grid: &mut G) {
        for &coord in &self.deaths {
            grid.set(coord, false);
        }
        for &coord in &self.births {
            grid.set(coord, true);
        }
    }
}

/// Conway's B3/S23 rule evaluated only around live cells.
///
/// Holds no state: everything it needs is read from the grid on each call.
pub struct RuleEngine;

impl RuleEngine {
    /// Number of live cells among the 8 wrapped neighbors of `coord`.
    pub fn live_neighbors<G: ToroidalGrid + ?Sized>(grid: &G, coord: Coord) -> usize {
        coord.neighbors().filter(|&n| grid.get(n)).count()
    }

    /// Computes the next generation without mutating `grid`.
    ///
    /// A dead cell can only reach 3 live neighbors if it borders a live cell,
    /// so births are searched among the dead neighbors of the live set.
    pub fn plan<G: ToroidalGrid + ?Sized>(grid: &G) -> Changeset {
        let bounds = grid.bounds();
        let live = grid.live_cells();

        let mut deaths = Vec::new();
        let mut candidates = AHashSet::with_capacity(live.len() * 2);
        for &cell in &live {
            if !matches!(Self::live_neighbors(grid, cell), 2 | 3) {
                deaths.push(cell);
            }
            for neighbor in cell.neighbors() {
                let neighbor = bounds.normalize(neighbor);
                if !grid.get(neighbor) {
                    candidates.insert(neighbor);
                }
            }
        }

        let births = candidates
            .into_iter()
            .filter(|&coord| Self::live_neighbors(grid, coord) == 3)
            .collect();

        Changeset { births, deaths }
    }

    /// Advances `grid` by exactly one generation.
    pub fn step<G: ToroidalGrid + ?Sized>(grid: &mut G) -> Changeset {
        let changes = Self::plan(grid);
        changes.apply(grid);
        grid.finish_generation();
        log::debug!(
            "generation {}: {} births, {} deaths, population {}",
            grid.generation(),
            changes.births.len(),
            changes.deaths.len(),
            grid.population(),
        );
        changes
    }

    /// Advances `grid` by `n` generations.
    pub fn run<G: ToroidalGrid + ?Sized>(grid: &mut G, n: usize) {
        for _ in 0..n {
            Self::step(grid);
        }
    }
}
