//! Corner-touch counter over the lattice points of a grid
//!
//! A grid of `rows x cols` cells has `(rows + 1) x (cols + 1)` lattice points.
//! Every placed mat raises the count at each of its four outer corners, so the
//! count at a point is the number of mats that have a corner there.

use ndarray::Array2;

use crate::io::error::{LayoutError, Result};

/// Corner-touch counts around a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerCounts {
    /// Upper left lattice point
    pub nw: u8,
    /// Upper right lattice point
    pub ne: u8,
    /// Lower left lattice point
    pub sw: u8,
    /// Lower right lattice point
    pub se: u8,
}

impl CornerCounts {
    /// Highest of the four counts
    pub fn max(&self) -> u8 {
        self.nw.max(self.ne).max(self.sw).max(self.se)
    }
}

/// Per-lattice-point corner-touch counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerLattice {
    counts: Array2<u8>,
}

impl CornerLattice {
    /// Create an all-zero lattice for a grid of `rows x cols` cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            counts: Array2::zeros((rows + 1, cols + 1)),
        }
    }

    /// Lattice dimensions (rows + 1, cols + 1)
    pub fn dim(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Count at a lattice point, `None` outside the lattice
    pub fn count(&self, point: [usize; 2]) -> Option<u8> {
        self.counts.get(point).copied()
    }

    /// Raise the count at a lattice point by one
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the point lies outside the lattice
    pub fn increment(&mut self, point: [usize; 2]) -> Result<()> {
        let dimensions = self.dim();
        let count = self
            .counts
            .get_mut(point)
            .ok_or_else(|| out_of_lattice(point, dimensions))?;
        *count = count.saturating_add(1);
        Ok(())
    }

    /// Lower the count at a lattice point by one
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the point lies outside the lattice and
    /// `CornerUnderflow` if the count is already zero
    pub fn decrement(&mut self, point: [usize; 2]) -> Result<()> {
        let dimensions = self.dim();
        let count = self
            .counts
            .get_mut(point)
            .ok_or_else(|| out_of_lattice(point, dimensions))?;
        *count = count
            .checked_sub(1)
            .ok_or(LayoutError::CornerUnderflow { point })?;
        Ok(())
    }

    /// Highest count anywhere on the lattice
    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Row-major view of the raw counts, row 0 first
    pub const fn counts(&self) -> &Array2<u8> {
        &self.counts
    }
}

fn out_of_lattice(point: [usize; 2], dimensions: (usize, usize)) -> LayoutError {
    LayoutError::OutOfBounds {
        row: point[0] as isize,
        col: point[1] as isize,
        dimensions,
    }
}
