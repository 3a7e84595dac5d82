use anyhow::Context;
use clap::Parser;
use cli::Options;
use colored::Colorize;
use libgame::{seeder, Board};
use renderer::layout::Layout;

mod cli;
mod renderer;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let mut board = Board::new(options.rows, options.columns).context("Creating board")?;
    seeder::seed_default(&mut board).context("Seeding initial patterns")?;

    let layout = Layout::new(&board, options.size, options.gap)?;

    println!(
        "{} {}x{} cells @ {}fps, window {}x{}px, {} alive",
        "life".bold().green(),
        board.columns(),
        board.rows(),
        options.fps,
        layout.screen_width(),
        layout.screen_height(),
        board.live_count().to_string().cyan(),
    );

    renderer::run(board, layout, options.fps)
}
