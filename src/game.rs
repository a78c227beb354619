use anyhow::Result;
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::{START_BODY, START_HEADING};
use crate::error::SnakeError;
use crate::render::{self, Canvas};
use crate::snake::{Heading::{self, *}, Snake};
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Restarted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RestartReason {
    Start,
    HitWall,
    BitItself,
    BoardFull,
}

/// Owns the snake, the food and the board, and advances them one tick at a time.
pub struct SnakeGame<R = ThreadRng> {
    board: Board,
    snake: Snake,
    food: Coords,
    rng: R,
    restarts: u64,
}

impl SnakeGame<ThreadRng> {
    pub fn new(board: Board) -> Result<Self, SnakeError> {
        SnakeGame::with_rng(board, rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    /// Fails if the board can't hold the starting snake plus one food cell.
    pub fn with_rng(board: Board, rng: R) -> Result<Self, SnakeError> {
        let fits = START_BODY.iter().all(|pos| board.contains(*pos));
        if !fits || board.cell_count() <= START_BODY.len() {
            return Err(SnakeError::InvalidBoard {
                width: board.width(),
                height: board.height(),
                tile: board.tile(),
            });
        }

        let mut game = SnakeGame {
            board,
            snake: Snake::new(&START_BODY, START_HEADING),
            food: (0, 0),
            rng,
            restarts: 0,
        };
        game.reset(RestartReason::Start);
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn heading(&self) -> Heading {
        self.snake.heading()
    }

    /// How many times the game has reset itself after a lost or finished round.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Puts the game in its starting position. The caller drives ticks from here on.
    pub fn start(&mut self) {
        info!(width = self.board.width(), height = self.board.height(), "starting game");
        self.reset(RestartReason::Start);
    }

    pub fn restart(&mut self) {
        self.reset(RestartReason::Start);
    }

    pub fn tick(&mut self) -> TickOutcome {
        let ate = match self.move_step() {
            Ok(ate) => ate,
            Err(_) => {
                self.reset(RestartReason::BoardFull);
                return TickOutcome::Restarted;
            }
        };

        if let Some(reason) = self.game_over_reason() {
            self.reset(reason);
            return TickOutcome::Restarted;
        }

        if ate { TickOutcome::Ate } else { TickOutcome::Moved }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        let cells = self.snake.body().iter().chain(std::iter::once(&self.food));
        render::draw(canvas, &self.board, cells)
    }

    /// Advances the head one tile, eating the food if it's there. Returns whether it ate.
    pub fn move_step(&mut self) -> Result<bool, SnakeError> {
        let new_head = self.snake.next_head(self.board.tile());

        if new_head == self.food {
            self.eat()?;
            Ok(true)
        } else {
            self.snake.follow(new_head);
            Ok(false)
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over_reason().is_some()
    }

    pub fn move_left(&mut self) {
        self.steer(Left);
    }

    pub fn move_right(&mut self) {
        self.steer(Right);
    }

    pub fn move_up(&mut self) {
        self.steer(Up);
    }

    pub fn move_down(&mut self) {
        self.steer(Down);
    }

    pub fn steer(&mut self, heading: Heading) {
        if !self.snake.set_heading(heading) {
            debug!(?heading, "ignoring reverse turn");
        }
    }

    /// The food becomes the new head and fresh food is placed.
    pub fn eat(&mut self) -> Result<(), SnakeError> {
        self.snake.grow(self.food);
        debug!(len = self.snake.len(), "snake ate");

        self.food = self.place_food()?;
        Ok(())
    }

    /// Picks a uniformly random cell that no segment occupies.
    pub fn place_food(&mut self) -> Result<Coords, SnakeError> {
        let snake = &self.snake;
        let food = self.board.cells()
            .filter(|cell| !snake.occupies(*cell))
            .choose(&mut self.rng)
            .ok_or(SnakeError::BoardFull)?;

        debug!(x = food.0, y = food.1, "placed food");
        Ok(food)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over_reason(&self) -> Option<RestartReason> {
        if !self.board.contains(self.snake.head()) {
            Some(RestartReason::HitWall)
        } else if self.snake.bites_itself() {
            Some(RestartReason::BitItself)
        } else {
            None
        }
    }

    fn reset(&mut self, reason: RestartReason) {
        if reason != RestartReason::Start {
            self.restarts += 1;
            info!(?reason, len = self.snake.len(), restarts = self.restarts, "round over, restarting");
        }

        self.snake = Snake::new(&START_BODY, START_HEADING);
        self.food = self.place_food().expect("checked in with_rng that the start leaves room for food");
    }
}
