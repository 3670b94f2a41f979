//! Error types for smiley configuration and text surface edits.
use thiserror::Error;

/// Rejected smiley configuration. Raised at startup, never during substitution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Smiley token must not be empty")]
    EmptyToken,

    #[error("Duplicate smiley token: {0}")]
    DuplicateToken(String),

    #[error("Alias must not be empty (target: {0})")]
    EmptyAlias(String),

    #[error("Duplicate alias: {0}")]
    DuplicateAlias(String),

    #[error("Alias {alias} refers to unknown token {token}")]
    DanglingAlias { alias: String, token: String },

    #[error("Unknown smiley set: {0}")]
    UnknownSet(String),
}

/// Selection range that cannot be applied to the buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Selection start {start} is after end {end}")]
    Inverted { start: usize, end: usize },

    #[error("Selection end {end} is past buffer length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// Failure while inserting a picked smiley.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("Token is not part of the active smiley set: {0}")]
    UnknownToken(String),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
