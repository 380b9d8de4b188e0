//! Immutable snapshots of complete layouts

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use ndarray::Array2;

use crate::io::error::Result;
use crate::spatial::{CornerLattice, Grid, Position, Tag};

/// A complete layout, copied out of the grid when the last cell was filled
///
/// Holds no reference into the grid; equality is over cell tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    tags: Array2<Tag>,
}

impl Solution {
    /// Snapshot the current tags of a grid
    pub fn capture(grid: &Grid) -> Self {
        Self { tags: grid.tags() }
    }

    /// Number of rows in the layout
    pub fn rows(&self) -> usize {
        self.tags.nrows()
    }

    /// Number of columns in the layout
    pub fn cols(&self) -> usize {
        self.tags.ncols()
    }

    /// Tag at a position, `None` outside the layout
    pub fn tag_at(&self, pos: Position) -> Option<Tag> {
        self.tags.get(pos).copied()
    }

    /// The full tag array, row 0 first
    pub const fn tags(&self) -> &Array2<Tag> {
        &self.tags
    }

    /// How many cells carry a given tag
    pub fn count_tag(&self, tag: Tag) -> usize {
        self.tags.iter().filter(|&&t| t == tag).count()
    }

    /// Whether the layout uses the half mat
    pub fn uses_half(&self) -> bool {
        self.tags.iter().any(|&t| t == Tag::Half)
    }

    /// Number of mats in the layout, half mat included
    pub fn mat_count(&self) -> usize {
        let mat_cells = self
            .tags
            .iter()
            .filter(|&&t| t.is_occupied() && t != Tag::Half)
            .count();
        mat_cells / 2 + self.count_tag(Tag::Half)
    }

    /// True iff no cell is left empty
    pub fn is_full(&self) -> bool {
        self.count_tag(Tag::Empty) == 0
    }

    /// Corner-touch counts implied by the layout
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` only if a corner falls outside the lattice,
    /// which the lattice dimensions rule out
    pub fn corner_lattice(&self) -> Result<CornerLattice> {
        let mut lattice = CornerLattice::new(self.rows(), self.cols());
        for ((row, col), tag) in self.tags.indexed_iter() {
            for corner in tag.outline_corners() {
                lattice.increment(corner.lattice_point([row, col]))?;
            }
        }
        Ok(lattice)
    }
}

/// Solutions in the order they were found, without content duplicates
///
/// Each snapshot is stored once; the lookup side keeps only indices into the
/// ordered list, bucketed by hash.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    ordered: Vec<Solution>,
    buckets: HashMap<u64, Vec<usize>>,
    hasher: RandomState,
}

impl SolutionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a solution unless an equal one is already present
    ///
    /// Returns whether the solution was new.
    pub fn insert(&mut self, solution: Solution) -> bool {
        let hash = self.hasher.hash_one(&solution);
        if self.find(hash, &solution).is_some() {
            return false;
        }
        self.buckets.entry(hash).or_default().push(self.ordered.len());
        self.ordered.push(solution);
        true
    }

    /// Whether an equal solution has been recorded
    pub fn contains(&self, solution: &Solution) -> bool {
        self.position(solution).is_some()
    }

    /// Discovery index of an equal solution, if one has been recorded
    pub fn position(&self, solution: &Solution) -> Option<usize> {
        self.find(self.hasher.hash_one(solution), solution)
    }

    fn find(&self, hash: u64, solution: &Solution) -> Option<usize> {
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&index| self.ordered.get(index) == Some(solution))
    }

    /// Number of recorded solutions
    pub const fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True if nothing has been recorded
    pub const fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Solution by discovery index
    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.ordered.get(index)
    }

    /// Most recently recorded solution
    pub fn last(&self) -> Option<&Solution> {
        self.ordered.last()
    }

    /// Iterate in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.ordered.iter()
    }

    /// Solutions in discovery order
    pub fn as_slice(&self) -> &[Solution] {
        self.ordered.as_slice()
    }

    /// Consume the set, keeping discovery order
    pub fn into_vec(self) -> Vec<Solution> {
        self.ordered
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}
