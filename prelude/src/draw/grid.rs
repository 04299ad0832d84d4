//! Discrete board coordinates, and their mapping onto the drawing plane

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// A cell of the board, as `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint(pub usize, pub usize);

impl GridPoint {
    pub fn new(row: usize, col: usize) -> Self {
        GridPoint(row, col)
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }

    /// Index of the cell in a row-major field of the given width
    pub fn index(&self, width: usize) -> usize {
        self.0 * width + self.1
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        GridPoint(index / width, index % width)
    }

    /// Center of the cell on the plane, `((col + 0.5) * spacing, (row + 0.5) * spacing)`
    pub fn to_plane(self, cell_spacing: f32) -> Point {
        Point::new(
            (self.1 as f32 + 0.5) * cell_spacing,
            (self.0 as f32 + 0.5) * cell_spacing,
        )
    }
}

/// Maps a whole boundary onto the plane, keeping its order
pub fn to_plane(points: &[GridPoint], cell_spacing: f32) -> Vec<Point> {
    points.iter().map(|p| p.to_plane(cell_spacing)).collect()
}

impl From<(usize, usize)> for GridPoint {
    fn from((row, col): (usize, usize)) -> Self {
        GridPoint(row, col)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}
