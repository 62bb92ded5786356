use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a board configuration is rejected before a game starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("start length must be at least 1")]
    ZeroStartLength,

    #[error("start length {start_length} does not fit left of the centre of a {width}-wide board")]
    StartLengthTooLong { start_length: u16, width: u16 },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raised when a direction name is not one of `UP`, `DOWN`, `LEFT`, `RIGHT`.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("unknown direction '{0}' (expected UP, DOWN, LEFT or RIGHT)")]
pub struct ParseDirectionError(pub String);
