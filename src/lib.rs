//! Exhaustive search for tatami layouts of rectangular rooms
//!
//! A room is a grid of cells, some of them blocked. Every empty cell must be
//! covered by a two-cell mat or by the single one-cell half mat, and no point
//! of the grid may be a corner of more than three mats. The search enumerates
//! every such layout in a fixed, reproducible order.

#![forbid(unsafe_code)]

/// Scan order, scoped placements and the backtracking search
pub mod algorithm;
/// Room parsing, rendering, image export and the command-line front end
pub mod io;
/// Cells, the corner lattice and the room grid
pub mod spatial;

pub use io::error::{LayoutError, Result};
