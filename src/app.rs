use std::time::{Duration, Instant};

use crate::config::Config;
use crate::game::GameState;
use crate::input::GameInput;
use crate::rng::Lcg;

/// What the outer loop should do after an input has been applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Drives one game lineage: holds the current snapshot, the generator that
/// feeds it, and the fixed tick schedule.
///
/// Inputs and ticks are applied strictly one at a time, each replacing the
/// snapshot with the next.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    rng: Lcg,
    tick_interval: Duration,
    last_tick: Instant,
}

impl App {
    /// Starts a game for `config` with a generator seeded by `seed`; the
    /// first tick falls due one `tick_interval` after `now`.
    #[must_use]
    pub fn new(config: Config, seed: u32, tick_interval: Duration, now: Instant) -> Self {
        let mut rng = Lcg::new(seed);
        let state = GameState::new(config, &mut rng);
        log::info!(
            "new game on {}x{} board with seed {seed}",
            config.width,
            config.height
        );

        Self {
            state,
            rng,
            tick_interval,
            last_tick: now,
        }
    }

    /// Returns the current snapshot for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput, now: Instant) -> Control {
        match input {
            GameInput::Direction(direction) => {
                self.state = self.state.set_direction(Some(direction));
            }
            GameInput::Pause => {
                self.state = self.state.toggle_pause();
                // Resuming starts a full interval instead of stepping at once.
                self.last_tick = now;
            }
            GameInput::Restart => {
                self.state = self.state.restart(&mut self.rng);
                self.last_tick = now;
                log::info!("game restarted");
            }
            GameInput::Quit => return Control::Quit,
        }

        Control::Continue
    }

    /// Returns true while the schedule should keep firing ticks.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        !self.state.is_terminal() && !self.state.paused
    }

    /// Steps the game once if a full interval has elapsed since the last
    /// tick. Returns whether a step was taken.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.is_ticking() {
            return false;
        }

        if now.saturating_duration_since(self.last_tick) < self.tick_interval {
            return false;
        }

        let previous_status = self.state.status;
        self.state = self.state.step(&mut self.rng);
        self.last_tick = now;

        if self.state.status != previous_status {
            log::info!(
                "game ended: {} with score {}",
                self.state.status_label(),
                self.state.score
            );
        }

        true
    }
}
