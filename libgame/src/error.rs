use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Rows,
    Columns,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Rows => f.write_str("rows"),
            Dimension::Columns => f.write_str("columns"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board construction with a non-positive row or column count.
    #[error("board {dimension} must be a positive integer")]
    InvalidDimension { dimension: Dimension },

    /// `rows * columns` cells can't be addressed or allocated.
    #[error("a {rows}x{columns} board is too large")]
    TooLarge { rows: usize, columns: usize },

    /// Coordinates are signed so that seeding anchors left or above the grid can be reported as given.
    #[error("cell ({row}, {col}) is outside of the {rows}x{columns} board")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        columns: usize,
    },
}
