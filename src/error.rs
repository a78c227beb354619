use thiserror::Error;

use crate::TermInt;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeError {
    #[error("no free cell left to place food on")]
    BoardFull,
    #[error("a {width}x{height} board cannot be split into tiles of size {tile}")]
    InvalidBoard { width: i32, height: i32, tile: i32 },
    #[error("terminal is {have_width}x{have_height}, the game needs at least {need_width}x{need_height}")]
    TerminalTooSmall {
        need_width: TermInt,
        need_height: TermInt,
        have_width: TermInt,
        have_height: TermInt,
    },
}
