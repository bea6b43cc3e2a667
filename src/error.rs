use std::path::PathBuf;

/// Why a column was rejected by `apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    ColumnFull,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => f.write_str("column out of range"),
            InvalidMoveReason::ColumnFull => f.write_str("column is full"),
        }
    }
}

/// Errors raised by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid move in column {column}: {reason}")]
    InvalidMove {
        column: usize,
        reason: InvalidMoveReason,
    },

    #[error("game is already over")]
    GameOver,

    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors raised by bots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Errors that can occur while simulating games.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("game error: {0}")]
    Game(#[from] GameError),

    #[error("bot error: {0}")]
    Bot(#[from] BotError),

    #[error("{bots} bots cannot fill a {seats}-seat board")]
    SeatMismatch { bots: usize, seats: usize },

    #[error("game did not finish within {limit} moves")]
    MoveLimitExceeded { limit: usize },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board section: {0}")]
    Board(#[from] GameError),
}
