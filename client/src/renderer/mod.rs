pub mod layout;
mod renderthing;

use libgame::Board;
use renderthing::{frame::RenderFrame, window::RendererWindowConfig, Renderer};

use layout::Layout;

const BACKGROUND_COLOR: [u8; 4] = [30, 30, 20, 255];
const ALIVE_COLOR: [u8; 4] = [255; 4];

/// Opens the window and advances `board` by one generation per frame until the window is closed.
pub fn run(mut board: Board, layout: Layout, target_fps: u64) -> anyhow::Result<()> {
    let renderer = Renderer::new(RendererWindowConfig {
        title: format!(
            "John Conway's Game of Life ({}x{}@{}fps)",
            layout.columns, layout.rows, target_fps
        ),
        width: layout.screen_width(),
        height: layout.screen_height(),
        target_fps,
        draw_callback: Box::new(move |frame| draw(&mut board, &layout, frame)),
    })?;

    renderer.run()
}

fn draw(board: &mut Board, layout: &Layout, mut frame: RenderFrame) -> anyhow::Result<()> {
    frame.fill(BACKGROUND_COLOR);

    board.step();

    for row in 0..layout.rows {
        for col in 0..layout.columns {
            if board.is_alive(row as usize, col as usize)? {
                let (x, y) = layout.cell_origin(row, col);
                frame.draw_square(x, y, layout.size, layout.size, ALIVE_COLOR);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(board: &mut Board, layout: &Layout) -> Vec<u8> {
        let mut buffer = vec![0; (layout.screen_width() * layout.screen_height()) as usize * 4];
        let frame = RenderFrame {
            width: layout.screen_width(),
            height: layout.screen_height(),
            buffer: &mut buffer,
        };

        draw(board, layout, frame).unwrap();
        buffer
    }

    #[test]
    fn draws_the_next_generation() {
        let mut board = Board::new(5, 5).unwrap();
        for col in 1..4 {
            board.set_alive(2, col).unwrap();
        }
        let layout = Layout::new(&board, 3, 1).unwrap();

        let mut buffer = render(&mut board, &layout);
        let frame = RenderFrame {
            width: layout.screen_width(),
            height: layout.screen_height(),
            buffer: &mut buffer,
        };

        assert_eq!(board.generation(), 1);

        // The blinker turned vertical before being drawn.
        let (x, y) = layout.cell_origin(1, 2);
        assert_eq!(frame.pixel(x, y), Some(&ALIVE_COLOR));
        assert_eq!(frame.pixel(x + 2, y + 2), Some(&ALIVE_COLOR));

        let (x, y) = layout.cell_origin(2, 1);
        assert_eq!(frame.pixel(x, y), Some(&BACKGROUND_COLOR));

        // Gaps stay background.
        assert_eq!(frame.pixel(0, 0), Some(&BACKGROUND_COLOR));
    }

    #[test]
    fn empty_board_is_background_only() {
        let mut board = Board::new(4, 6).unwrap();
        let layout = Layout::new(&board, 2, 2).unwrap();

        let buffer = render(&mut board, &layout);

        assert!(buffer
            .chunks_exact(4)
            .all(|pixel| pixel == BACKGROUND_COLOR));
    }
}
