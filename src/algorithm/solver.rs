//! Exhaustive depth-first layout search
//!
//! At each step the search takes the first empty cell in diagonal scan order as
//! the anchor and tries, in this order, a `West` mat, a `South` mat and the
//! half mat. A `North` or `East` mat at the anchor would need a partner that
//! comes earlier in the scan and is therefore already filled, so these three
//! candidates reach every layout exactly once.
//!
//! Placements are held by `PlacementGuard`s, so unwinding out of the
//! recursion for any reason leaves the grid exactly as it was handed in.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crate::algorithm::order::ScanOrder;
use crate::algorithm::placement::PlacementGuard;
use crate::algorithm::solution::{Solution, SolutionSet};
use crate::spatial::{Direction, Grid, MatId, Occupant};

/// Candidate placements at each anchor, in the order they are tried
pub const CANDIDATES: [Occupant; 3] = [
    Occupant::Mat(Direction::West),
    Occupant::Mat(Direction::South),
    Occupant::Half,
];

/// External bounds on a search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Stop once this many distinct solutions have been recorded
    pub max_solutions: Option<usize>,
    /// Stop once this instant has passed
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    /// No bounds at all
    pub const fn unbounded() -> Self {
        Self {
            max_solutions: None,
            deadline: None,
        }
    }

    /// Limit the number of recorded solutions
    #[must_use]
    pub const fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = Some(max_solutions);
        self
    }

    /// Limit the wall-clock time from now
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    fn check(&self, found: usize) -> ControlFlow<StopReason> {
        if self.max_solutions.is_some_and(|max| found >= max) {
            return ControlFlow::Break(StopReason::SolutionLimit);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return ControlFlow::Break(StopReason::Deadline);
        }
        ControlFlow::Continue(())
    }
}

/// Why a search ended before exhausting the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `max_solutions` was reached
    SolutionLimit,
    /// The deadline passed
    Deadline,
}

/// Counters collected during the walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes entered
    pub nodes: u64,
    /// Successful placements
    pub placements: u64,
    /// Nodes with an empty anchor where no candidate fit
    pub dead_ends: u64,
    /// Complete layouts that matched an already recorded one
    pub duplicates: u64,
}

/// Result of a finished or stopped search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Recorded layouts in discovery order
    pub solutions: SolutionSet,
    /// Counters collected during the walk
    pub stats: SearchStats,
    /// Set when a limit cut the search short
    pub stopped: Option<StopReason>,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// True when the search did not explore the whole tree
    pub const fn is_truncated(&self) -> bool {
        self.stopped.is_some()
    }
}

/// Callback invoked for each newly recorded solution
pub type SolutionObserver<'a> = Box<dyn FnMut(&Solution, &SearchStats) + 'a>;

/// Owns a grid for the duration of one search
pub struct Solver<'a> {
    grid: Grid,
    first_id: MatId,
    limits: SearchLimits,
    observer: Option<SolutionObserver<'a>>,
}

impl<'a> Solver<'a> {
    /// Take ownership of the starting grid
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            first_id: 0,
            limits: SearchLimits::unbounded(),
            observer: None,
        }
    }

    /// Number new mats from `first_id`, after any pre-placed ones
    #[must_use]
    pub fn starting_id(mut self, first_id: MatId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Bound the search
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Register a callback for each newly recorded solution
    #[must_use]
    pub fn on_solution(mut self, observer: impl FnMut(&Solution, &SearchStats) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Read access to the starting grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run the search to completion or until a limit is hit
    ///
    /// The grid is consumed; solutions are independent snapshots.
    pub fn solve(self) -> SearchOutcome {
        let Self {
            mut grid,
            first_id,
            limits,
            observer,
        } = self;

        let start = Instant::now();
        let mut search = Search {
            order: ScanOrder::for_grid(&grid),
            limits,
            observer,
            solutions: SolutionSet::new(),
            stats: SearchStats::default(),
        };

        // A half mat already in the room uses up the allowance
        let frame = Frame {
            cursor: 0,
            next_id: first_id,
            half_used: grid.half_count() > 0,
        };

        let stopped = match search.descend(&mut grid, frame) {
            ControlFlow::Continue(()) => None,
            ControlFlow::Break(reason) => {
                log::debug!(
                    "search stopped ({reason:?}) after {} solutions",
                    search.solutions.len()
                );
                Some(reason)
            }
        };

        SearchOutcome {
            solutions: search.solutions,
            stats: search.stats,
            stopped,
            elapsed: start.elapsed(),
        }
    }
}

/// Per-call search state, passed by value down the recursion
#[derive(Debug, Clone, Copy)]
struct Frame {
    cursor: usize,
    next_id: MatId,
    half_used: bool,
}

impl Frame {
    const fn after(self, anchor_index: usize, occupant: Occupant) -> Self {
        Self {
            cursor: anchor_index + 1,
            next_id: self.next_id.saturating_add(1),
            half_used: self.half_used || matches!(occupant, Occupant::Half),
        }
    }
}

struct Search<'a> {
    order: ScanOrder,
    limits: SearchLimits,
    observer: Option<SolutionObserver<'a>>,
    solutions: SolutionSet,
    stats: SearchStats,
}

impl Search<'_> {
    fn descend(&mut self, grid: &mut Grid, frame: Frame) -> ControlFlow<StopReason> {
        self.stats.nodes += 1;

        let Some((index, anchor)) = self.order.next_empty(grid, frame.cursor) else {
            self.record(grid);
            return self.limits.check(self.solutions.len());
        };

        let mut placed_any = false;
        for occupant in CANDIDATES {
            if frame.half_used && occupant == Occupant::Half {
                continue;
            }
            self.limits.check(self.solutions.len())?;

            let Some(mut guard) = PlacementGuard::try_place(grid, anchor, occupant, frame.next_id)
            else {
                continue;
            };
            placed_any = true;
            self.stats.placements += 1;
            self.descend(&mut guard, frame.after(index, occupant))?;
        }

        if !placed_any {
            self.stats.dead_ends += 1;
        }
        ControlFlow::Continue(())
    }

    fn record(&mut self, grid: &Grid) {
        let solution = Solution::capture(grid);
        if self.solutions.insert(solution) {
            log::debug!("recorded solution #{}", self.solutions.len());
            if let (Some(observer), Some(latest)) = (self.observer.as_mut(), self.solutions.last())
            {
                observer(latest, &self.stats);
            }
        } else {
            self.stats.duplicates += 1;
        }
    }
}
