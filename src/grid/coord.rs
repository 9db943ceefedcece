use anyhow::{anyhow, Result};

/// Offsets of the Moore neighborhood, the cell itself excluded.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Integer cell coordinate. Any pair is valid; grids wrap it into their bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 surrounding coordinates, not wrapped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Dimensions of a toroidal field, both strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: i64,
    height: i64,
}

impl Bounds {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(anyhow!(
                "Grid bounds must be positive, got {}x{}",
                width,
                height
            ));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Number of cells, `None` if a row-major index would overflow.
    pub fn area(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|area| usize::try_from(area).ok())
    }

    /// Wraps `coord` into `[0, width) x [0, height)`.
    ///
    /// Euclidean remainder keeps negative inputs on the far side of the torus.
    pub fn normalize(&self, coord: Coord) -> Coord {
        Coord::new(coord.x.rem_euclid(self.width), coord.y.rem_euclid(self.height))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }

    /// All in-bounds coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y)))
    }
}
