//! Scoped mat placement that is undone when the scope ends

use std::ops::{Deref, DerefMut};

use crate::spatial::{Grid, MatId, Occupant, Position};

/// A placed mat that is removed again when the guard drops
///
/// The guard holds the only mutable borrow of the grid, so nothing else can
/// touch the grid until the placement has been rolled back. Dereferences to
/// the grid to let the search recurse on it.
#[derive(Debug)]
pub struct PlacementGuard<'g> {
    grid: &'g mut Grid,
    anchor: Position,
}

impl<'g> PlacementGuard<'g> {
    /// Place `occupant` at `anchor` if the grid allows it
    ///
    /// Returns `None` without modifying the grid when `can_place` rejects the
    /// placement.
    pub fn try_place(
        grid: &'g mut Grid,
        anchor: Position,
        occupant: Occupant,
        id: MatId,
    ) -> Option<Self> {
        if !grid.can_place(anchor, occupant) {
            return None;
        }
        grid.place(anchor, occupant, id).ok()?;
        Some(Self { grid, anchor })
    }

    /// Anchor cell of the placed mat
    pub const fn anchor(&self) -> Position {
        self.anchor
    }
}

impl Deref for PlacementGuard<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl DerefMut for PlacementGuard<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.grid.remove(self.anchor) {
            log::error!(
                "failed to undo placement at ({}, {}): {error}",
                self.anchor[0],
                self.anchor[1]
            );
        }
    }
}
