use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Board and starting-snake parameters, fixed for the lifetime of a game and
/// carried over on restart.
///
/// Missing JSON fields fall back to [`Config::default`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub start_length: u16,
    pub start_direction: Direction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            start_length: DEFAULT_START_LENGTH,
            start_direction: Direction::Right,
        }
    }
}

/// Per-field values that replace whatever the config file set.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ConfigOverrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub start_length: Option<u16>,
    pub start_direction: Option<Direction>,
}

impl Config {
    /// Returns the board dimensions as a [`GridSize`].
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        GridSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Checks that the starting snake fits on the board.
    ///
    /// The engine accepts any config; callers run this before starting a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.start_length == 0 {
            return Err(ConfigError::ZeroStartLength);
        }

        // The tail lands at width/2 - (start_length - 1), which must stay >= 0.
        if self.start_length > self.width / 2 + 1 {
            return Err(ConfigError::StartLengthTooLong {
                start_length: self.start_length,
                width: self.width,
            });
        }

        Ok(())
    }

    /// Reads a JSON config file, merging present fields over the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns this config with every present override applied.
    #[must_use]
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            width: overrides.width.unwrap_or(self.width),
            height: overrides.height.unwrap_or(self.height),
            start_length: overrides.start_length.unwrap_or(self.start_length),
            start_direction: overrides.start_direction.unwrap_or(self.start_direction),
        }
    }

    /// Builds the effective config: the `explicit` file if given, else
    /// `fallback` when it exists, else the defaults; then `overrides`.
    ///
    /// The result is validated, so a bad override is reported the same way
    /// as a bad file value. An explicit path that cannot be read is an error.
    pub fn resolve(
        explicit: Option<&Path>,
        fallback: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let base = match explicit.or_else(|| fallback.filter(|path| path.is_file())) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        let config = base.with_overrides(overrides);
        config.validate()?;
        log::debug!("resolved config: {config:?}");
        Ok(config)
    }
}

/// Returns the per-user config file path, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_GRID_WIDTH: u16 = 20;
pub const DEFAULT_GRID_HEIGHT: u16 = 20;
pub const DEFAULT_START_LENGTH: u16 = 3;

/// Fixed interval between simulation ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 130;

/// How long the input poll may block per frame.
pub const INPUT_POLL_MS: u64 = 16;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

pub const THEME: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_text: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Rounded border around the play area.
pub const BORDER_PLAY_AREA: border::Set = border::ROUNDED;

/// Each grid cell is drawn two terminal columns wide to look square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_SNAKE_TAIL: &str = "░░";
pub const GLYPH_FOOD: &str = "()";
