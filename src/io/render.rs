//! Human-readable glyph rendering of grids and solutions
//!
//! Rows are printed from the highest row index down to row 0, so the output
//! reads the same way as a room description. Every row starts with one space
//! and every glyph is followed by one.

use std::fmt::{self, Write};

use crate::algorithm::Solution;
use crate::spatial::{CornerLattice, Grid, Tag};

/// Display glyph for a cell tag
pub const fn glyph(tag: Tag) -> char {
    match tag {
        Tag::North => '\u{2293}',
        Tag::East => '\u{2290}',
        Tag::South => '\u{2294}',
        Tag::West => '\u{228F}',
        Tag::Half => '\u{22A1}',
        Tag::Empty => '.',
        Tag::Blocked => '#',
    }
}

fn render_rows(
    rows: usize,
    cols: usize,
    tag_at: impl Fn([usize; 2]) -> Option<Tag>,
) -> String {
    let mut output = String::with_capacity(rows * (cols * 4 + 2));
    for row in (0..rows).rev() {
        output.push(' ');
        for col in 0..cols {
            output.push(glyph(tag_at([row, col]).unwrap_or(Tag::Empty)));
            output.push(' ');
        }
        output.push('\n');
    }
    output
}

/// Render a grid as glyph rows
pub fn render_grid(grid: &Grid) -> String {
    render_rows(grid.rows(), grid.cols(), |pos| grid.tag_at(pos))
}

/// Render a solution as glyph rows
pub fn render_solution(solution: &Solution) -> String {
    render_rows(solution.rows(), solution.cols(), |pos| solution.tag_at(pos))
}

/// Render the corner-touch counts, top lattice row first
pub fn render_corners(lattice: &CornerLattice) -> String {
    let mut output = String::new();
    let counts = lattice.counts();
    for row in (0..counts.nrows()).rev() {
        let line = counts
            .row(row)
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        // Writing to a String cannot fail
        let _ = writeln!(output, "{line}");
    }
    output
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_solution(self))
    }
}
