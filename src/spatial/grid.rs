//! Room grid with cell occupancy and an incrementally maintained corner counter
//!
//! The corner lattice is always derivable from the cells, but recomputing it on
//! every legality check would cost a full scan. Instead `place` and `remove`
//! adjust exactly the lattice points a mat touches, which keeps `can_place`
//! constant time. `remove` at the anchor of a `place` is its exact inverse.

use std::hash::{Hash, Hasher};

use ndarray::Array2;

use crate::io::configuration::MAX_CORNER_TOUCHES;
use crate::io::error::{LayoutError, Result};
use crate::spatial::cell::{
    Cell, Corner, Direction, MatId, Occupant, Position, Tag, offset_position,
};
use crate::spatial::corners::{CornerCounts, CornerLattice};

/// Cell occupancy plus the corner-touch lattice
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Cell>,
    corners: CornerLattice,
    empty_count: usize,
}

impl Grid {
    /// Create an open room with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Empty),
            corners: CornerLattice::new(rows, cols),
            empty_count: rows * cols,
        }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Read the cell at a position
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn get(&self, pos: Position) -> Result<Cell> {
        self.cells
            .get(pos)
            .copied()
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Overwrite a cell without touching the corner counter
    ///
    /// Raw access for loaders; writing a mat cell this way does not write its
    /// partner. Use `place` for anything the search should see.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<()> {
        self.replace(pos, cell).map(|_| ())
    }

    /// Reset a cell to empty without touching the corner counter
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn clear(&mut self, pos: Position) -> Result<()> {
        self.set(pos, Cell::Empty)
    }

    /// Mark a cell as permanently unplaceable
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn set_blocked(&mut self, pos: Position) -> Result<()> {
        self.set(pos, Cell::Blocked)
    }

    /// True iff the cell exists and is empty
    pub fn is_empty_spot(&self, pos: Position) -> bool {
        matches!(self.cells.get(pos), Some(Cell::Empty))
    }

    /// True iff no cell is empty
    pub const fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// True iff every cell is empty
    pub fn is_empty(&self) -> bool {
        self.empty_count == self.cells.len()
    }

    /// Number of empty cells
    pub const fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Number of cells that are not blocked
    pub fn placeable_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !matches!(cell, Cell::Blocked))
            .count()
    }

    /// Number of half mats currently placed
    pub fn half_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Half { .. }))
            .count()
    }

    /// Corner-touch counts at the four corners of a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn corners_around(&self, pos: Position) -> Result<CornerCounts> {
        if self.cells.get(pos).is_none() {
            return Err(self.out_of_bounds(pos));
        }
        let at = |corner: Corner| self.corners.count(corner.lattice_point(pos)).unwrap_or(0);
        Ok(CornerCounts {
            nw: at(Corner::Nw),
            ne: at(Corner::Ne),
            sw: at(Corner::Sw),
            se: at(Corner::Se),
        })
    }

    /// Whether a mat may be placed with its anchor at `pos`
    ///
    /// The anchor (and the partner, for two-cell mats) must be in range and
    /// empty, and none of the mat's outer corners may already carry
    /// `MAX_CORNER_TOUCHES` mats.
    pub fn can_place(&self, pos: Position, occupant: Occupant) -> bool {
        if !self.is_empty_spot(pos) {
            return false;
        }

        match occupant {
            Occupant::Half => self.corners_have_room(pos, occupant.anchor_corners()),
            Occupant::Mat(direction) => {
                let Some(partner) = offset_position(pos, direction.partner_offset()) else {
                    return false;
                };
                self.is_empty_spot(partner)
                    && self.corners_have_room(pos, direction.outer_corners())
                    && self.corners_have_room(partner, direction.opposite().outer_corners())
            }
        }
    }

    /// Put a mat down with its anchor at `pos`
    ///
    /// Legality is not re-checked; callers are expected to have asked
    /// `can_place` first.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the anchor or the partner lies outside the
    /// grid. Nothing is modified in that case.
    pub fn place(&mut self, pos: Position, occupant: Occupant, id: MatId) -> Result<()> {
        self.get(pos)?;

        match occupant {
            Occupant::Half => {
                self.replace(pos, Cell::Half { id })?;
                self.touch(pos, occupant.anchor_corners())
            }
            Occupant::Mat(toward) => {
                let partner = self.partner_of(pos, toward)?;
                self.replace(pos, Cell::Mat { toward, id })?;
                self.replace(
                    partner,
                    Cell::Mat {
                        toward: toward.opposite(),
                        id,
                    },
                )?;
                self.touch(pos, occupant.anchor_corners())?;
                self.touch(partner, toward.opposite().outer_corners())
            }
        }
    }

    /// Take up the mat covering `pos`
    ///
    /// Works from either cell of a two-cell mat. Empty and blocked cells are
    /// left alone.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid and
    /// `CornerUnderflow` if the counter disagrees with the cells
    pub fn remove(&mut self, pos: Position) -> Result<()> {
        match self.get(pos)? {
            Cell::Empty | Cell::Blocked => Ok(()),
            cell @ Cell::Half { .. } => {
                self.replace(pos, Cell::Empty)?;
                self.release(pos, cell.outline_corners())
            }
            cell @ Cell::Mat { toward, .. } => {
                let partner = self.partner_of(pos, toward)?;
                self.replace(pos, Cell::Empty)?;
                self.replace(partner, Cell::Empty)?;
                self.release(pos, cell.outline_corners())?;
                self.release(partner, toward.opposite().outer_corners())
            }
        }
    }

    /// Read access to the incrementally maintained corner counter
    pub const fn corner_lattice(&self) -> &CornerLattice {
        &self.corners
    }

    /// Recompute the corner counter from cell state alone
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if a cell's corner falls outside the lattice,
    /// which cannot happen for a consistent grid
    pub fn recount_corners(&self) -> Result<CornerLattice> {
        let mut lattice = CornerLattice::new(self.rows(), self.cols());
        for ((row, col), cell) in self.cells.indexed_iter() {
            for corner in cell.outline_corners() {
                lattice.increment(corner.lattice_point([row, col]))?;
            }
        }
        Ok(lattice)
    }

    /// Id-free copy of every cell
    pub fn tags(&self) -> Array2<Tag> {
        self.cells.map(|cell| cell.tag())
    }

    /// Tag of the cell at `pos`, `None` outside the grid
    pub fn tag_at(&self, pos: Position) -> Option<Tag> {
        self.cells.get(pos).map(|cell| cell.tag())
    }

    /// Iterate over `(position, cell)` pairs, row 0 first
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ([row, col], *cell))
    }

    fn partner_of(&self, pos: Position, toward: Direction) -> Result<Position> {
        let offset = toward.partner_offset();
        offset_position(pos, offset)
            .filter(|partner| self.cells.get(*partner).is_some())
            .ok_or_else(|| LayoutError::OutOfBounds {
                row: pos[0] as isize + offset[0],
                col: pos[1] as isize + offset[1],
                dimensions: self.dimensions(),
            })
    }

    // Keeps `empty_count` in step with every cell write
    fn replace(&mut self, pos: Position, cell: Cell) -> Result<Cell> {
        let error = self.out_of_bounds(pos);
        let slot = self.cells.get_mut(pos).ok_or(error)?;
        let previous = std::mem::replace(slot, cell);

        match (previous, cell) {
            (Cell::Empty, Cell::Empty) => {}
            (Cell::Empty, _) => self.empty_count -= 1,
            (_, Cell::Empty) => self.empty_count += 1,
            _ => {}
        }

        Ok(previous)
    }

    fn corners_have_room(&self, pos: Position, corners: &[Corner]) -> bool {
        corners.iter().all(|corner| {
            self.corners
                .count(corner.lattice_point(pos))
                .is_some_and(|count| count < MAX_CORNER_TOUCHES)
        })
    }

    fn touch(&mut self, pos: Position, corners: &[Corner]) -> Result<()> {
        for corner in corners {
            self.corners.increment(corner.lattice_point(pos))?;
        }
        Ok(())
    }

    fn release(&mut self, pos: Position, corners: &[Corner]) -> Result<()> {
        for corner in corners {
            self.corners.decrement(corner.lattice_point(pos))?;
        }
        Ok(())
    }

    fn out_of_bounds(&self, pos: Position) -> LayoutError {
        LayoutError::OutOfBounds {
            row: pos[0] as isize,
            col: pos[1] as isize,
            dimensions: self.dimensions(),
        }
    }
}

/// Grids compare by cell tags only; mat identifiers are ignored
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.tag() == b.tag())
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimensions().hash(state);
        for cell in &self.cells {
            cell.tag().hash(state);
        }
    }
}
