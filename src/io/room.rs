//! Room description parsing
//!
//! The first line holds the height and width. Each following line is one row
//! of the room, top row first, one symbol per cell (separating spaces are
//! ignored):
//!
//! | Symbol | Cell |
//! |---|---|
//! | `.` | empty |
//! | `b`, `#` | blocked |
//! | `n`, `e`, `s`, `w` | anchor of a mat whose partner lies in that direction's offset |
//! | `h` | half mat |
//!
//! The partner of a pre-placed mat is derived from its anchor. It may be
//! written as `.` or as the partner's own direction letter. Every letter takes
//! the next mat identifier, partner letters included.

use std::path::Path;

use crate::algorithm::Solver;
use crate::io::configuration::MAX_ROOM_DIMENSION;
use crate::io::error::{Result, WithPath, invalid_parameter, room_format};
use crate::spatial::cell::offset_position;
use crate::spatial::{Cell, Direction, Grid, MatId, Occupant, Position};

/// A parsed room ready to be searched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    grid: Grid,
    next_mat_id: MatId,
}

/// One symbol of the description, before mats are laid down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Empty,
    Blocked,
    Mat(Occupant),
}

impl Symbol {
    const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            'b' | '#' => Some(Self::Blocked),
            'n' => Some(Self::Mat(Occupant::Mat(Direction::North))),
            'e' => Some(Self::Mat(Occupant::Mat(Direction::East))),
            's' => Some(Self::Mat(Occupant::Mat(Direction::South))),
            'w' => Some(Self::Mat(Occupant::Mat(Direction::West))),
            'h' => Some(Self::Mat(Occupant::Half)),
            _ => None,
        }
    }
}

impl Room {
    /// An open room of the given size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_ROOM_DIMENSION`
    pub fn open(rows: usize, cols: usize) -> Result<Self> {
        check_dimension("height", rows)?;
        check_dimension("width", cols)?;
        Ok(Self {
            grid: Grid::new(rows, cols),
            next_mat_id: 0,
        })
    }

    /// Read and parse a room description file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `RoomFormat` if its
    /// contents are malformed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read room")?;
        Self::parse(&text)
    }

    /// Parse a room description
    ///
    /// # Errors
    ///
    /// Returns `RoomFormat` if:
    /// - The header is missing or does not hold two sizes
    /// - The number of rows or the length of a row does not match the header
    /// - A symbol is not recognised
    /// - A pre-placed mat's partner is out of range, blocked or already covered
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| room_format(1, &"missing size header"))?;
        let (rows, cols) = parse_header(header_line, header)?;

        let mut row_lines: Vec<(usize, &str)> = lines.collect();
        while row_lines
            .last()
            .is_some_and(|(_, line)| line.trim().is_empty())
        {
            row_lines.pop();
        }

        if row_lines.len() != rows {
            return Err(room_format(
                header_line,
                &format!("header declares {rows} rows, found {}", row_lines.len()),
            ));
        }

        // Top input row is the highest row index
        let mut grid = Grid::new(rows, cols);
        let mut mats = Vec::new();
        for (offset, (line_number, line)) in row_lines.iter().enumerate() {
            let row = rows - 1 - offset;
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != cols {
                return Err(room_format(
                    *line_number,
                    &format!("expected {cols} cells, found {}", symbols.len()),
                ));
            }

            for (col, &symbol) in symbols.iter().enumerate() {
                match Symbol::from_char(symbol) {
                    Some(Symbol::Empty) => {}
                    Some(Symbol::Blocked) => grid.set_blocked([row, col])?,
                    Some(Symbol::Mat(occupant)) => mats.push(([row, col], occupant, *line_number)),
                    None => {
                        return Err(room_format(
                            *line_number,
                            &format!("unrecognised symbol '{symbol}' in column {}", col + 1),
                        ));
                    }
                }
            }
        }

        // Identifiers follow grid order, bottom row first
        mats.sort_by_key(|(pos, _, _)| *pos);
        let mut next_mat_id = 0;
        for (pos, occupant, line_number) in mats {
            lay_mat(&mut grid, pos, occupant, next_mat_id, line_number)?;
            next_mat_id += 1;
        }

        Ok(Self { grid, next_mat_id })
    }

    /// The starting grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Identifier the next placed mat should receive
    pub const fn next_mat_id(&self) -> MatId {
        self.next_mat_id
    }

    /// Give up the room, keeping only its grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// A solver owning this room's grid, numbering after pre-placed mats
    pub fn into_solver<'a>(self) -> Solver<'a> {
        let next_mat_id = self.next_mat_id;
        Solver::new(self.grid).starting_id(next_mat_id)
    }
}

fn parse_header(line_number: usize, header: &str) -> Result<(usize, usize)> {
    let sizes = header
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| room_format(line_number, &format!("invalid size: {e}")))?;

    let [rows, cols] = sizes.as_slice() else {
        return Err(room_format(
            line_number,
            &"header must hold exactly a height and a width",
        ));
    };

    for (name, size) in [("height", *rows), ("width", *cols)] {
        if size == 0 || size > MAX_ROOM_DIMENSION {
            return Err(room_format(
                line_number,
                &format!("{name} {size} is outside 1..={MAX_ROOM_DIMENSION}"),
            ));
        }
    }

    Ok((*rows, *cols))
}

fn lay_mat(
    grid: &mut Grid,
    pos: Position,
    occupant: Occupant,
    id: MatId,
    line_number: usize,
) -> Result<()> {
    match (grid.get(pos)?, occupant) {
        (Cell::Empty, _) => {}
        // Partner letter of a mat already laid from its anchor; the cell keeps the anchor's id
        (Cell::Mat { toward, .. }, Occupant::Mat(direction)) if toward == direction => {
            return Ok(());
        }
        (cell, _) => {
            return Err(room_format(
                line_number,
                &format!(
                    "cell ({}, {}) is already {:?}",
                    pos[0],
                    pos[1],
                    cell.tag()
                ),
            ));
        }
    }

    if let Occupant::Mat(direction) = occupant {
        let partner = offset_position(pos, direction.partner_offset())
            .filter(|partner| partner[0] < grid.rows() && partner[1] < grid.cols());
        match partner {
            None => {
                return Err(room_format(
                    line_number,
                    &format!(
                        "mat at ({}, {}) reaches outside the room",
                        pos[0], pos[1]
                    ),
                ));
            }
            Some(partner) if !grid.is_empty_spot(partner) => {
                return Err(room_format(
                    line_number,
                    &format!(
                        "partner cell ({}, {}) of mat at ({}, {}) is not free",
                        partner[0], partner[1], pos[0], pos[1]
                    ),
                ));
            }
            Some(_) => {}
        }
    }

    grid.place(pos, occupant, id)
}

fn check_dimension(parameter: &'static str, size: usize) -> Result<()> {
    if size == 0 || size > MAX_ROOM_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &size,
            &format!("must be within 1..={MAX_ROOM_DIMENSION}"),
        ));
    }
    Ok(())
}
