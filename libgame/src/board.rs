use itertools::Itertools;

use crate::{
    error::{BoardError, Dimension},
    pos::Position,
    rule::Rule,
};

const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, 0],  // N
    [-1, 1],  // NE
    [0, 1],   // E
    [1, 1],   // SE
    [1, 0],   // S
    [1, -1],  // SW
    [0, -1],  // W
    [-1, -1], // NW
];

/// A bounded grid of cells. Everything outside of `rows x columns` is treated as dead.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,

    // Write target of `step`, swapped with `cells` once a generation is complete.
    next_cells: Vec<CellState>,
    generation: u64,
}

impl Board {
    /// Creates an all-dead board. Zero or negative dimensions are rejected rather than clamped.
    pub fn new<R, C>(rows: R, columns: C) -> Result<Self, BoardError>
    where
        R: TryInto<usize>,
        C: TryInto<usize>,
    {
        let rows = positive_dimension(rows, Dimension::Rows)?;
        let columns = positive_dimension(columns, Dimension::Columns)?;

        let too_large = BoardError::TooLarge { rows, columns };
        let cell_count = rows.checked_mul(columns).ok_or(too_large.clone())?;

        Ok(Self {
            rows,
            columns,
            cells: dead_cells(cell_count).ok_or(too_large.clone())?,
            next_cells: dead_cells(cell_count).ok_or(too_large)?,
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of generations computed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        let index = self.checked_index(row, col)?;
        Ok(self.cells[index] == CellState::Alive)
    }

    /// Meant for seeding only, `step` is the only mutator once the simulation runs.
    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = CellState::Alive;
        Ok(())
    }

    pub fn cell<P>(&self, pos: P) -> Option<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    /// Advances the board by exactly one generation.
    ///
    /// Neighbor counts are always read from the current generation, the results land in the
    /// second buffer which then becomes the current one.
    pub fn step(&mut self) {
        for index in 0..self.cells.len() {
            let alive_neighbors = self.alive_neighbors(self.index_to_pos(index));
            self.next_cells[index] = Rule::next_state(self.cells[index], alive_neighbors);
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
    }

    /// Counts the live cells among the up to 8 in-bounds neighbors of `pos`.
    pub fn alive_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[d_row, d_col]| pos.offset(*d_row, *d_col))
            .filter_map(|neighbor| self.cell(neighbor))
            .filter(|state| *state == CellState::Alive)
            .count()
    }

    /// All coordinates of the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..self.rows)
            .cartesian_product(0..self.columns)
            .map(Position::from)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| **state == CellState::Alive)
            .count()
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        self.pos_to_index((row, col))
            .ok_or_else(|| BoardError::OutOfBounds {
                row: signed(row),
                col: signed(col),
                rows: self.rows,
                columns: self.columns,
            })
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.columns {
            return None;
        }

        Some(col + (row * self.columns))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.columns;
        let col = index % self.columns;
        Position { row, col }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.cells == other.cells
    }
}

impl Eq for Board {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

fn positive_dimension<T>(value: T, dimension: Dimension) -> Result<usize, BoardError>
where
    T: TryInto<usize>,
{
    value
        .try_into()
        .ok()
        .filter(|value| *value > 0)
        .ok_or(BoardError::InvalidDimension { dimension })
}

/// Allocates fallibly so that oversized boards surface as an error instead of aborting.
fn dead_cells(len: usize) -> Option<Vec<CellState>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).ok()?;
    cells.resize(len, CellState::Dead);
    Some(cells)
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
