//! Diagonal scan order used to pick the next anchor cell
//!
//! Cells are visited by increasing `row + col`, and within one diagonal by
//! increasing column. Every cell before the current anchor is filled, so the
//! partner of a `West` or `South` mat always lies later in the order.

use crate::spatial::{Grid, Position};

/// Precomputed visiting order for a fixed grid size
#[derive(Debug, Clone)]
pub struct ScanOrder {
    positions: Vec<Position>,
}

impl ScanOrder {
    /// Build the order for a grid of `rows x cols` cells
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut positions = Vec::with_capacity(rows * cols);
        if rows == 0 || cols == 0 {
            return Self { positions };
        }
        let ranks = (rows + cols).saturating_sub(1);

        for rank in 0..ranks {
            let first_col = rank.saturating_sub(rows.saturating_sub(1));
            let last_col = rank.min(cols.saturating_sub(1));
            for col in first_col..=last_col {
                positions.push([rank - col, col]);
            }
        }

        Self { positions }
    }

    /// Build the order matching a grid's dimensions
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Number of positions in the order
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// True for a grid without cells
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position at a scan index
    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// First empty cell at or after scan index `from`
    ///
    /// Returns the scan index together with the position, or `None` once no
    /// empty cell remains.
    pub fn next_empty(&self, grid: &Grid, from: usize) -> Option<(usize, Position)> {
        self.positions
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, pos)| grid.is_empty_spot(**pos))
            .map(|(index, pos)| (index, *pos))
    }

    /// Iterate over all positions in scan order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}
