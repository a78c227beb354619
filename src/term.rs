use crate::{TermInt, Coords};
use crate::board::Board;
use crate::config::{COLUMNS_PER_TILE, FILL_CHAR};
use crate::error::SnakeError;
use crate::render::Canvas;
use std::{io::{Stdout, Write, stdout}, ops::Range, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use tracing::warn;

/// Maps board pixels onto terminal character cells inside a one character border.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    board: Board,
    columns_per_tile: TermInt,
}

impl Viewport {
    pub fn new(board: Board, columns_per_tile: TermInt) -> Self {
        Viewport { board, columns_per_tile }
    }

    /// Terminal size needed to show the whole board and its border.
    pub fn required_size(&self) -> (TermInt, TermInt) {
        let width = self.board.columns() as TermInt * self.columns_per_tile + 2;
        let height = self.board.rows() as TermInt + 2;
        (width, height)
    }

    /// Character columns and rows, relative to the inside of the border, touched by a
    /// pixel rectangle. Whatever falls outside the board is cut off.
    pub fn cell_span(&self, (x, y): Coords, width: i32, height: i32) -> (Range<TermInt>, Range<TermInt>) {
        let tile = self.board.tile();
        let per_tile = self.columns_per_tile as i32;

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.board.width());
        let y1 = (y + height).min(self.board.height());

        if x1 <= x0 || y1 <= y0 {
            return (0..0, 0..0);
        }

        let cols = (x0 * per_tile / tile)..ceil_div(x1 * per_tile, tile);
        let rows = (y0 / tile)..ceil_div(y1, tile);
        (cols.start as TermInt..cols.end as TermInt, rows.start as TermInt..rows.end as TermInt)
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}

/// Terminal drawing surface. Frames are composed in memory and only the changed
/// characters are written out on `present`.
pub struct TermCanvas {
    stdout: Stdout,
    viewport: Viewport,
    inner: (TermInt, TermInt),
    screen: Vec<char>,
    shown: Vec<char>,
    active: bool,
}

impl TermCanvas {
    pub fn new(board: Board) -> Result<Self> {
        let viewport = Viewport::new(board, COLUMNS_PER_TILE);
        let need = viewport.required_size();
        let have = terminal::size().context("Error reading terminal size")?;

        if have.0 < need.0 || have.1 < need.1 {
            return Err(SnakeError::TerminalTooSmall {
                need_width: need.0,
                need_height: need.1,
                have_width: have.0,
                have_height: have.1,
            }.into());
        }

        let inner = (need.0 - 2, need.1 - 2);
        let cells = inner.0 as usize * inner.1 as usize;
        Ok(TermCanvas {
            stdout: stdout(),
            viewport,
            inner,
            screen: vec![' '; cells],
            shown: vec![' '; cells],
            active: false,
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error hiding cursor")?;

        self.draw_borders()?;
        self.flush()
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        self.active = false;
        terminal::disable_raw_mode().context("Error unsetting raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// Waits up to `timeout` for key presses, returning whatever arrived.
    pub fn read_key_events(&self, timeout: Duration) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait).context("Error polling for input")? {
            if let Event::Key(ev) = read().context("Error reading input")? {
                events.push(ev);
            }
            wait = Duration::from_millis(0);
        }

        Ok(events)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = (self.inner.0 + 2, self.inner.1 + 2);
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        Ok(())
    }

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
            .context("Error writing to terminal")
    }
}

impl Canvas for TermCanvas {
    fn clear(&mut self, _board: &Board) -> Result<()> {
        self.screen.iter_mut().for_each(|ch| *ch = ' ');
        Ok(())
    }

    fn fill_rect(&mut self, top_left: Coords, width: i32, height: i32) -> Result<()> {
        let (cols, rows) = self.viewport.cell_span(top_left, width, height);
        let stride = self.inner.0 as usize;

        for row in rows {
            for col in cols.clone() {
                self.screen[row as usize * stride + col as usize] = FILL_CHAR;
            }
        }

        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let stride = self.inner.0 as usize;

        for i in 0..self.screen.len() {
            let ch = self.screen[i];
            if ch != self.shown[i] {
                let (col, row) = ((i % stride) as TermInt, (i / stride) as TermInt);
                self.print_at((col + 1, row + 1), ch)?;
                self.shown[i] = ch;
            }
        }

        self.flush()
    }
}

impl Drop for TermCanvas {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore the terminal: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Board::new(400, 200, 10).unwrap(), 2)
    }

    #[test]
    fn default_board_needs_82_by_22() {
        assert_eq!(viewport().required_size(), (82, 22));
    }

    #[test]
    fn tile_rect_covers_two_columns_one_row() {
        let vp = viewport();
        assert_eq!(vp.cell_span((0, 0), 9, 9), (0..2, 0..1));
        assert_eq!(vp.cell_span((20, 10), 9, 9), (4..6, 1..2));
        assert_eq!(vp.cell_span((390, 190), 9, 9), (78..80, 19..20));
    }

    #[test]
    fn rect_outside_the_board_is_dropped() {
        let vp = viewport();
        assert_eq!(vp.cell_span((400, 10), 9, 9), (0..0, 0..0));
        assert_eq!(vp.cell_span((-10, 10), 9, 9), (0..0, 0..0));
    }

    #[test]
    fn partially_visible_rect_is_clipped() {
        let vp = viewport();
        assert_eq!(vp.cell_span((-5, 0), 9, 9), (0..1, 0..1));
        assert_eq!(vp.cell_span((0, 0), 1000, 1000), (0..80, 0..20));
    }
}
