//! Conway's Game of Life on a bounded grid.
//!
//! [`Board`] holds the current generation and advances it with [`Board::step`] using the
//! standard B3/S23 rule, [`seeder`] stamps the starting patterns.

pub use board::{Board, CellState};
pub use error::{BoardError, Dimension};
pub use pos::Position;
pub use rule::Rule;

pub mod board;
pub mod error;
pub mod pos;
pub mod rule;
pub mod seeder;
