//! Starting patterns stamped onto a [`Board`] relative to an anchor cell.

use crate::{board::Board, error::BoardError};

pub struct Pattern {
    pub name: &'static str,

    /// `(row, col)` offsets relative to the anchor.
    pub cells: &'static [(isize, isize)],
}

/// Travels one cell down and to the right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(-1, 0), (0, 1), (1, 1), (1, 0), (1, -1)],
};

pub const SPACESHIP: Pattern = Pattern {
    name: "spaceship",
    cells: &[
        (-1, -1),
        (-1, 2),
        (0, -2),
        (1, -2),
        (1, 2),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (2, 2),
    ],
};

impl Pattern {
    /// Marks every cell of the pattern alive around `(row, col)`.
    ///
    /// Bounds are left to [`Board::set_alive`], a cell landing outside of the board fails with
    /// [`BoardError::OutOfBounds`]. Cells written before the failing one stay alive.
    pub fn stamp(&self, board: &mut Board, row: isize, col: isize) -> Result<(), BoardError> {
        for &(d_row, d_col) in self.cells {
            let (cell_row, cell_col) = (row + d_row, col + d_col);

            let (Ok(board_row), Ok(board_col)) =
                (usize::try_from(cell_row), usize::try_from(cell_col))
            else {
                return Err(BoardError::OutOfBounds {
                    row: cell_row,
                    col: cell_col,
                    rows: board.rows(),
                    columns: board.columns(),
                });
            };

            board.set_alive(board_row, board_col)?;
        }

        Ok(())
    }
}

pub fn place_glider(board: &mut Board, row: isize, col: isize) -> Result<(), BoardError> {
    GLIDER.stamp(board, row, col)
}

pub fn place_spaceship(board: &mut Board, row: isize, col: isize) -> Result<(), BoardError> {
    SPACESHIP.stamp(board, row, col)
}

/// Seeds a glider above-left of the center and a spaceship right of it.
pub fn seed_default(board: &mut Board) -> Result<(), BoardError> {
    let too_large = || BoardError::TooLarge {
        rows: board.rows(),
        columns: board.columns(),
    };
    let center_row = center(board.rows()).ok_or_else(too_large)?;
    let center_col = center(board.columns()).ok_or_else(too_large)?;

    place_glider(board, center_row - 8, center_col - 5)?;
    place_spaceship(board, center_row, center_col + 5)?;

    Ok(())
}

/// Middle index of `len` cells, rounding down for even lengths.
fn center(len: usize) -> Option<isize> {
    let len = isize::try_from(len).ok()?;
    Some((len - 1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(board: &Board) -> Vec<(usize, usize)> {
        board
            .positions()
            .filter(|pos| board.is_alive(pos.row, pos.col).unwrap())
            .map(|pos| (pos.row, pos.col))
            .collect()
    }

    #[test]
    fn glider_stamps_five_cells_around_anchor() {
        let mut board = Board::new(10, 10).unwrap();

        place_glider(&mut board, 4, 4).unwrap();

        assert_eq!(
            alive_cells(&board),
            vec![(3, 4), (4, 5), (5, 3), (5, 4), (5, 5)]
        );
    }

    #[test]
    fn spaceship_stamps_ten_cells_around_anchor() {
        let mut board = Board::new(10, 10).unwrap();

        place_spaceship(&mut board, 4, 4).unwrap();

        assert_eq!(board.live_count(), 10);
        assert_eq!(
            alive_cells(&board),
            vec![
                (3, 3),
                (3, 6),
                (4, 2),
                (5, 2),
                (5, 6),
                (6, 2),
                (6, 3),
                (6, 4),
                (6, 5),
                (6, 6),
            ]
        );
    }

    #[test]
    fn glider_travels_diagonally() {
        let mut board = Board::new(20, 20).unwrap();
        place_glider(&mut board, 5, 5).unwrap();
        let start = alive_cells(&board);

        for _ in 0..4 {
            board.step();
            assert_eq!(board.live_count(), 5);
        }

        let moved = start
            .iter()
            .map(|(row, col)| (row + 1, col + 1))
            .collect::<Vec<_>>();
        assert_eq!(alive_cells(&board), moved);

        let mut expected = Board::new(20, 20).unwrap();
        place_glider(&mut expected, 6, 6).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn glider_travels_on_non_square_board() {
        let mut board = Board::new(7, 16).unwrap();
        place_glider(&mut board, 2, 11).unwrap();

        for _ in 0..8 {
            board.step();
        }

        let mut expected = Board::new(7, 16).unwrap();
        place_glider(&mut expected, 4, 13).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(center(60), Some(29));
        assert_eq!(center(80), Some(39));
        assert_eq!(center(1), Some(0));
        assert_eq!(center(usize::MAX), None);
    }

    #[test]
    fn anchor_too_close_to_the_edge_fails() {
        let mut board = Board::new(10, 10).unwrap();

        assert_eq!(
            place_glider(&mut board, 0, 4),
            Err(BoardError::OutOfBounds {
                row: -1,
                col: 4,
                rows: 10,
                columns: 10,
            })
        );
        assert!(matches!(
            place_spaceship(&mut board, 8, 4),
            Err(BoardError::OutOfBounds { row: 10, .. })
        ));
        assert!(place_spaceship(&mut Board::new(10, 10).unwrap(), 4, 8).is_err());
    }

    #[test]
    fn default_layout_on_default_grid() {
        let mut board = Board::new(60, 80).unwrap();

        seed_default(&mut board).unwrap();

        assert_eq!(board.live_count(), 15);
        // Glider anchored at (21, 34), spaceship at (29, 44).
        assert_eq!(board.is_alive(20, 34), Ok(true));
        assert_eq!(board.is_alive(22, 33), Ok(true));
        assert_eq!(board.is_alive(28, 43), Ok(true));
        assert_eq!(board.is_alive(31, 46), Ok(true));
    }

    #[test]
    fn default_layout_needs_room() {
        let mut board = Board::new(10, 10).unwrap();

        assert!(matches!(
            seed_default(&mut board),
            Err(BoardError::OutOfBounds { .. })
        ));
    }
}
