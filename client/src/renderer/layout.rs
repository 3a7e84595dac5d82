use anyhow::Context;
use libgame::Board;

/// Pixel geometry of the board: `size`-wide cells separated by `gap` pixels, with a one pixel
/// border on the far edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: u32,
    pub columns: u32,
    pub size: u32,
    pub gap: u32,
}

impl Layout {
    pub fn new(board: &Board, size: u32, gap: u32) -> anyhow::Result<Self> {
        let layout = Self {
            rows: u32::try_from(board.rows()).context("Too many rows to display")?,
            columns: u32::try_from(board.columns()).context("Too many columns to display")?,
            size,
            gap,
        };

        layout
            .checked_extent(layout.columns)
            .zip(layout.checked_extent(layout.rows))
            .context("Window size overflows")?;

        Ok(layout)
    }

    pub fn screen_width(&self) -> u32 {
        self.extent(self.columns)
    }

    pub fn screen_height(&self) -> u32 {
        self.extent(self.rows)
    }

    /// Top-left pixel of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        let pitch = self.size + self.gap;
        (self.gap + col * pitch, self.gap + row * pitch)
    }

    fn extent(&self, cells: u32) -> u32 {
        cells * self.size + cells * self.gap + 1
    }

    fn checked_extent(&self, cells: u32) -> Option<u32> {
        cells
            .checked_mul(self.size)?
            .checked_add(cells.checked_mul(self.gap)?)?
            .checked_add(1)
    }
}
