use anyhow::Result;

use crate::board::Board;
use crate::Coords;

/// A drawing surface addressed in board pixels.
pub trait Canvas {
    fn clear(&mut self, board: &Board) -> Result<()>;
    fn fill_rect(&mut self, top_left: Coords, width: i32, height: i32) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// Redraws every snake segment and the food, leaving a one pixel gap on the
/// right and bottom of each tile.
pub fn draw<'a, C, I>(canvas: &mut C, board: &Board, cells: I) -> Result<()>
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = &'a Coords>,
{
    canvas.clear(board)?;

    let size = board.tile() - 1;
    for pos in cells {
        canvas.fill_rect(*pos, size, size)?;
    }

    canvas.present()
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Remembers what was drawn since the last clear.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub rects: Vec<(Coords, i32, i32)>,
        pub clears: usize,
        pub presents: usize,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, _board: &Board) -> Result<()> {
            self.rects.clear();
            self.clears += 1;
            Ok(())
        }

        fn fill_rect(&mut self, top_left: Coords, width: i32, height: i32) -> Result<()> {
            self.rects.push((top_left, width, height));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.presents += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingCanvas;
    use super::*;

    #[test]
    fn draws_each_cell_one_pixel_short() {
        let board = Board::new(400, 200, 10).unwrap();
        let mut canvas = RecordingCanvas::default();

        draw(&mut canvas, &board, &[(20, 10), (10, 10), (100, 50)]).unwrap();

        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.presents, 1);
        assert_eq!(canvas.rects, vec![((20, 10), 9, 9), ((10, 10), 9, 9), ((100, 50), 9, 9)]);
    }

    #[test]
    fn redraw_starts_from_a_clean_surface() {
        let board = Board::new(40, 20, 10).unwrap();
        let mut canvas = RecordingCanvas::default();

        draw(&mut canvas, &board, &[(0, 0), (10, 0)]).unwrap();
        draw(&mut canvas, &board, &[(20, 0)]).unwrap();

        assert_eq!(canvas.clears, 2);
        assert_eq!(canvas.rects, vec![((20, 0), 9, 9)]);
    }
}
