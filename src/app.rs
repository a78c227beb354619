use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::config::TICK_INTERVAL;
use crate::game::{SnakeGame, TickOutcome};
use crate::input::{command_for, Command};
use crate::term::TermCanvas;

/// Fixed-rate schedule. A loop that falls more than one interval behind skips the
/// missed ticks instead of running them back to back.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Ticker { interval, next: now + interval }
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Returns whether a tick is due, and if so schedules the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

pub struct App<R: Rng> {
    game: SnakeGame<R>,
    canvas: TermCanvas,
}

impl<R: Rng> App<R> {
    pub fn new(game: SnakeGame<R>, canvas: TermCanvas) -> Self {
        App { game, canvas }
    }

    /// Runs until the player quits.
    pub fn run(mut self) -> Result<()> {
        self.canvas.setup()?;
        self.game.start();
        self.game.draw(&mut self.canvas)?;

        let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());

        loop {
            let wait = ticker.remaining(Instant::now());
            for key_ev in self.canvas.read_key_events(wait)? {
                match command_for(&key_ev) {
                    Some(Command::Steer(heading)) => self.game.steer(heading),
                    Some(Command::Quit) => {
                        info!(restarts = self.game.restarts(), "quitting");
                        return self.canvas.restore();
                    }
                    None => {}
                }
            }

            if !ticker.poll(Instant::now()) {
                continue;
            }

            if self.game.tick() == TickOutcome::Ate {
                debug!(len = self.game.snake().len(), "grew");
            }
            self.game.draw(&mut self.canvas)?;
        }
    }
}
