use serde::Serialize;

use crate::config::Config;
use crate::food::place_food;
use crate::input::Direction;
use crate::rng::RandomSource;
use crate::snake::{Snake, Vector2};

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Running,
    GameOver,
    Won,
}

impl GameStatus {
    /// Returns true for states that only a restart can leave.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// Why the last game ended in [`GameStatus::GameOver`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Immutable snapshot of one game.
///
/// Every operation returns a new snapshot and leaves `self` untouched.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameState {
    pub config: Config,
    pub snake: Snake,
    /// Direction applied on the most recent tick.
    pub direction: Direction,
    /// Direction the next tick will apply.
    pub pending_direction: Direction,
    pub food: Option<Vector2>,
    pub score: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub death_reason: Option<DeathReason>,
}

impl GameState {
    /// Creates a fresh running game for `config`.
    ///
    /// The starting snake is not checked against the board; run
    /// [`Config::validate`] first when the config comes from a user.
    #[must_use]
    pub fn new<R: RandomSource + ?Sized>(config: Config, rng: &mut R) -> Self {
        let snake = Snake::initial(&config);
        let food = place_food(&snake, config.width, config.height, rng);

        Self {
            config,
            snake,
            direction: config.start_direction,
            pending_direction: config.start_direction,
            food,
            score: 0,
            status: GameStatus::Running,
            paused: false,
            death_reason: None,
        }
    }

    /// Buffers `direction` for the next tick.
    ///
    /// Ignored on terminal states, for `None`, and for a reversal of the
    /// committed direction. Later calls before a tick overwrite earlier ones.
    #[must_use]
    pub fn set_direction(&self, direction: Option<Direction>) -> Self {
        if self.status != GameStatus::Running {
            return self.clone();
        }

        let Some(direction) = direction else {
            return self.clone();
        };

        if direction.is_opposite_of(self.direction) {
            return self.clone();
        }

        Self {
            pending_direction: direction,
            ..self.clone()
        }
    }

    /// Flips the paused flag of a running game.
    #[must_use]
    pub fn toggle_pause(&self) -> Self {
        if self.status != GameStatus::Running {
            return self.clone();
        }

        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    /// Starts over with the same config, drawing food from `rng`.
    #[must_use]
    pub fn restart<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.config, rng)
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Returns an identical snapshot when the game is paused or terminal.
    #[must_use]
    pub fn step<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        if self.status != GameStatus::Running || self.paused {
            return self.clone();
        }

        let Some(head) = self.snake.head() else {
            return self.clone();
        };

        let direction = self.pending_direction;
        let next_head = head + direction.vector();

        if !next_head.is_within_bounds(self.config.bounds()) {
            return self.game_over(direction, DeathReason::WallCollision);
        }

        let will_grow = self.food == Some(next_head);
        if self.snake.blocks(next_head, will_grow) {
            return self.game_over(direction, DeathReason::SelfCollision);
        }

        let snake = self.snake.advanced(next_head, will_grow);

        if !will_grow {
            return Self {
                snake,
                direction,
                ..self.clone()
            };
        }

        let food = place_food(&snake, self.config.width, self.config.height, rng);
        let status = if food.is_some() {
            GameStatus::Running
        } else {
            log::debug!("board filled at length {}", snake.len());
            GameStatus::Won
        };

        Self {
            snake,
            direction,
            food,
            score: self.score + 1,
            status,
            ..self.clone()
        }
    }

    /// Returns true once the game is over or won.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Short status text shown by front ends.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status {
            GameStatus::GameOver => "Game over",
            GameStatus::Won => "You win",
            GameStatus::Running if self.paused => "Paused",
            GameStatus::Running => "Running",
        }
    }

    fn game_over(&self, direction: Direction, reason: DeathReason) -> Self {
        log::debug!(
            "game over after {:?} at score {} heading {direction}",
            reason,
            self.score
        );

        Self {
            direction,
            status: GameStatus::GameOver,
            death_reason: Some(reason),
            ..self.clone()
        }
    }
}
