/// Diagonal scan order for anchor selection
pub mod order;
/// Scoped placements that undo themselves
pub mod placement;
/// Immutable layout snapshots and their ordered set
pub mod solution;
/// Depth-first search over all layouts
pub mod solver;

pub use solution::{Solution, SolutionSet};
pub use solver::{SearchLimits, SearchOutcome, SearchStats, Solver, StopReason};
