pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub type TermInt = u16;
pub type Coords = (i32, i32);
