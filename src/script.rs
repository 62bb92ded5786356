//! Headless playback of a scripted input sequence.
//!
//! A script is a string with one character per tick: `U`, `D`, `L`, `R` set
//! a direction, `P` toggles pause, `.` does nothing. Whitespace is ignored.
//! Each tick applies its action and then steps the game once.

use crate::game::GameState;
use crate::input::Direction;
use crate::rng::RandomSource;

/// One scripted tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScriptAction {
    Turn(Direction),
    TogglePause,
    Wait,
}

/// A character that is not part of the script alphabet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[error("unexpected '{symbol}' at position {position} in input script")]
pub struct ScriptError {
    pub symbol: char,
    pub position: usize,
}

/// Parses a script, rejecting unknown characters.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptAction>, ScriptError> {
    raw.chars()
        .enumerate()
        .filter(|(_, symbol)| !symbol.is_whitespace())
        .map(|(position, symbol)| {
            let action = match symbol.to_ascii_uppercase() {
                'U' => ScriptAction::Turn(Direction::Up),
                'D' => ScriptAction::Turn(Direction::Down),
                'L' => ScriptAction::Turn(Direction::Left),
                'R' => ScriptAction::Turn(Direction::Right),
                'P' => ScriptAction::TogglePause,
                '.' => ScriptAction::Wait,
                _ => return Err(ScriptError { symbol, position }),
            };
            Ok(action)
        })
        .collect()
}

/// Plays `actions` against `state`, stopping early once the game ends.
///
/// Returns the final snapshot and the number of ticks consumed.
#[must_use]
pub fn run_script<R: RandomSource + ?Sized>(
    state: GameState,
    actions: &[ScriptAction],
    rng: &mut R,
) -> (GameState, usize) {
    let mut state = state;
    let mut ticks = 0;

    for action in actions {
        if state.is_terminal() {
            break;
        }

        state = match *action {
            ScriptAction::Turn(direction) => state.set_direction(Some(direction)),
            ScriptAction::TogglePause => state.toggle_pause(),
            ScriptAction::Wait => state,
        };
        state = state.step(rng);
        ticks += 1;
    }

    (state, ticks)
}
