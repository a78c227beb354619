use std::time::Duration;

use crate::Coords;
use crate::snake::Heading;

pub const BOARD_WIDTH: i32 = 400;
pub const BOARD_HEIGHT: i32 = 200;
pub const TILE_SIZE: i32 = 10;

pub const TICK_INTERVAL: Duration = Duration::from_millis(70);

/// Head first, then the two trailing segments.
pub const START_BODY: [Coords; 3] = [(20, 10), (10, 10), (0, 10)];
pub const START_HEADING: Heading = Heading::Right;

// One tile is drawn as two terminal columns so cells look roughly square
pub const COLUMNS_PER_TILE: u16 = 2;

pub const FILL_CHAR: char = '█';

pub const DEFAULT_LOG_FILTER: &str = "termsnake=info";
