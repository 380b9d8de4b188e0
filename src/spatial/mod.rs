//! Spatial data structures for the room model
//!
//! This module contains:
//! - Cell contents and mat orientations
//! - The corner-touch lattice
//! - The grid that keeps both consistent

/// Cell contents, directions and corners
pub mod cell;
/// Corner-touch counts per lattice point
pub mod corners;
/// Grid state with placement and removal primitives
pub mod grid;

pub use cell::{Cell, Corner, Direction, MatId, Occupant, Position, Tag};
pub use corners::{CornerCounts, CornerLattice};
pub use grid::Grid;
