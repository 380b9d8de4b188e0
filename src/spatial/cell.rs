//! Cell contents, mat orientations and cell corners

/// Cell coordinates as `[row, col]`, row 0 at the bottom of the room
pub type Position = [usize; 2];

/// Identifier shared by both cells of one mat
pub type MatId = u32;

/// Direction from a mat cell toward the other half of the same mat
///
/// The tag also names the side of the cell that lies on the mat's outer
/// edge: a `North` cell has its partner one row down and its own north
/// edge on the mat boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Partner at row - 1
    North,
    /// Partner at column - 1
    East,
    /// Partner at row + 1
    South,
    /// Partner at column + 1
    West,
}

impl Direction {
    /// All four directions
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Offset `[row, col]` from this cell to its partner
    pub const fn partner_offset(self) -> [isize; 2] {
        match self {
            Self::North => [-1, 0],
            Self::East => [0, -1],
            Self::South => [1, 0],
            Self::West => [0, 1],
        }
    }

    /// Tag carried by the partner cell
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The two corners of this cell that the mat's outer edge touches
    pub const fn outer_corners(self) -> &'static [Corner] {
        match self {
            Self::North => &[Corner::Nw, Corner::Ne],
            Self::East => &[Corner::Se, Corner::Ne],
            Self::South => &[Corner::Sw, Corner::Se],
            Self::West => &[Corner::Sw, Corner::Nw],
        }
    }

    /// Tag of a cell holding this direction
    pub const fn tag(self) -> Tag {
        match self {
            Self::North => Tag::North,
            Self::East => Tag::East,
            Self::South => Tag::South,
            Self::West => Tag::West,
        }
    }
}

/// What a single placement puts down at its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// Two-cell mat reaching from the anchor toward its partner
    Mat(Direction),
    /// One-cell mat
    Half,
}

impl Occupant {
    /// Corners of the anchor cell whose counts the placement raises
    pub const fn anchor_corners(self) -> &'static [Corner] {
        match self {
            Self::Mat(direction) => direction.outer_corners(),
            Self::Half => &Corner::ALL,
        }
    }
}

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Free for placement
    #[default]
    Empty,
    /// Permanently unplaceable
    Blocked,
    /// One half of a two-cell mat
    Mat {
        /// Direction toward the partner cell
        toward: Direction,
        /// Identifier shared with the partner cell
        id: MatId,
    },
    /// The one-cell mat
    Half {
        /// Mat identifier
        id: MatId,
    },
}

impl Cell {
    /// Id-free projection used for equality and snapshots
    pub const fn tag(self) -> Tag {
        match self {
            Self::Empty => Tag::Empty,
            Self::Blocked => Tag::Blocked,
            Self::Mat { toward, .. } => toward.tag(),
            Self::Half { .. } => Tag::Half,
        }
    }

    /// Identifier of the mat covering this cell, if any
    pub const fn mat_id(self) -> Option<MatId> {
        match self {
            Self::Mat { id, .. } | Self::Half { id } => Some(id),
            Self::Empty | Self::Blocked => None,
        }
    }

    /// Corners of this cell that belong to the outline of its mat
    pub const fn outline_corners(self) -> &'static [Corner] {
        self.tag().outline_corners()
    }
}

/// Cell state with mat identifiers stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Mat cell whose partner is one row down
    North,
    /// Mat cell whose partner is one column left
    East,
    /// Mat cell whose partner is one row up
    South,
    /// Mat cell whose partner is one column right
    West,
    /// Half mat
    Half,
    /// Free cell
    Empty,
    /// Unplaceable cell
    Blocked,
}

impl Tag {
    /// Whether a mat covers the cell
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty | Self::Blocked)
    }

    /// Corners a cell with this tag contributes to the corner counter
    ///
    /// Each half of a two-cell mat owns the two corners on its outer edge;
    /// together the halves cover the four corners of the mat.
    pub const fn outline_corners(self) -> &'static [Corner] {
        match self {
            Self::North => Direction::North.outer_corners(),
            Self::East => Direction::East.outer_corners(),
            Self::South => Direction::South.outer_corners(),
            Self::West => Direction::West.outer_corners(),
            Self::Half => &Corner::ALL,
            Self::Empty | Self::Blocked => &[],
        }
    }
}

/// Corner of a cell, named by compass position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper left
    Nw,
    /// Upper right
    Ne,
    /// Lower left
    Sw,
    /// Lower right
    Se,
}

impl Corner {
    /// All four corners
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// Lattice point `[row, col]` of this corner of the cell at `pos`
    pub const fn lattice_point(self, pos: Position) -> [usize; 2] {
        match self {
            Self::Sw => [pos[0], pos[1]],
            Self::Se => [pos[0], pos[1] + 1],
            Self::Nw => [pos[0] + 1, pos[1]],
            Self::Ne => [pos[0] + 1, pos[1] + 1],
        }
    }
}

/// Apply a signed offset to a position, `None` below row or column zero
pub const fn offset_position(pos: Position, offset: [isize; 2]) -> Option<Position> {
    match (
        pos[0].checked_add_signed(offset[0]),
        pos[1].checked_add_signed(offset[1]),
    ) {
        (Some(row), Some(col)) => Some([row, col]),
        _ => None,
    }
}
