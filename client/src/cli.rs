use clap::Parser;

/// John Conway's Game of Life
#[derive(Debug, Clone, Parser)]
#[command(name = "client", about = "John Conway's Game of Life")]
pub struct Options {
    /// Number of frames per second, one generation is computed per frame.
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub fps: u64,

    /// Number of columns.
    // Signed so that the board, not the parser, rejects non-positive dimensions.
    #[arg(short, long, default_value_t = 80, allow_negative_numbers = true)]
    pub columns: i64,

    /// Number of rows.
    #[arg(short, long, default_value_t = 60, allow_negative_numbers = true)]
    pub rows: i64,

    /// Size of a cell in pixels.
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Gap between cells in pixels.
    #[arg(short, long, default_value_t = 2)]
    pub gap: u32,
}
