use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Heading::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Heading),
    Quit,
}

/// WASD in either case steers, Ctrl+C or Esc quits, everything else is ignored.
pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Steer(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Steer(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Steer(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Steer(Right)),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
