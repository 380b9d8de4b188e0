//! Error types and context management for layout operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// A cell position fell outside the grid
    ///
    /// Signed coordinates are kept so that partner positions that would lie
    /// below row or column zero can be reported as they were computed.
    OutOfBounds {
        /// Row that was accessed
        row: isize,
        /// Column that was accessed
        col: isize,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// A corner-touch count would drop below zero
    ///
    /// Only reachable if cells were written around the placement primitives,
    /// since every removal mirrors an earlier placement.
    CornerUnderflow {
        /// Lattice point (row, col) whose count was already zero
        point: [usize; 2],
    },

    /// Room description could not be parsed
    RoomFormat {
        /// 1-based line number in the description
        line: usize,
        /// Explanation of what is wrong with the line
        reason: String,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An export was requested with nothing to draw
    NothingToExport {
        /// Description of what was missing
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({row}, {col}) is out of bounds (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::CornerUnderflow { point } => {
                write!(
                    f,
                    "Corner count at lattice point ({}, {}) is already zero",
                    point[0], point[1]
                )
            }
            Self::RoomFormat { line, reason } => {
                write!(f, "Invalid room description at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NothingToExport { reason } => {
                write!(f, "Nothing to export: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Replace the placeholder path of a file system error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<LayoutError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            LayoutError::FileSystem { source, .. } => LayoutError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            LayoutError::ImageExport { source, .. } => LayoutError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for LayoutError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a room description error for a 1-based line number
pub fn room_format(line: usize, reason: &impl ToString) -> LayoutError {
    LayoutError::RoomFormat {
        line,
        reason: reason.to_string(),
    }
}
