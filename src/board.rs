use crate::Coords;
use crate::error::SnakeError;

/// Playing field in pixels, split into square tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    tile: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, tile: i32) -> Result<Self, SnakeError> {
        if tile <= 0 || width <= 0 || height <= 0 || width % tile != 0 || height % tile != 0 {
            return Err(SnakeError::InvalidBoard { width, height, tile });
        }

        Ok(Board { width, height, tile })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile(&self) -> i32 {
        self.tile
    }

    pub fn columns(&self) -> i32 {
        self.width / self.tile
    }

    pub fn rows(&self) -> i32 {
        self.height / self.tile
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    pub fn contains(&self, (x, y): Coords) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Top-left corner of every tile, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let (columns, tile) = (self.columns(), self.tile);
        (0..self.columns() * self.rows()).map(move |i| ((i % columns) * tile, (i / columns) * tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_has_800_cells() {
        let board = Board::new(400, 200, 10).unwrap();
        assert_eq!(board.cell_count(), 800);

        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), 800);
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[39], (390, 0));
        assert_eq!(cells[40], (0, 10));
        assert_eq!(cells[799], (390, 190));
    }

    #[test]
    fn bounds_are_half_open() {
        let board = Board::new(400, 200, 10).unwrap();
        assert!(board.contains((0, 0)));
        assert!(board.contains((390, 190)));
        assert!(!board.contains((400, 10)));
        assert!(!board.contains((10, 200)));
        assert!(!board.contains((-10, 10)));
        assert!(!board.contains((10, -10)));
    }

    #[test]
    fn rejects_misaligned_dimensions() {
        assert_eq!(
            Board::new(405, 200, 10),
            Err(SnakeError::InvalidBoard { width: 405, height: 200, tile: 10 })
        );
        assert!(Board::new(400, 200, 0).is_err());
    }
}
