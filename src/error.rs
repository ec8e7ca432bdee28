use std::path::PathBuf;

use crate::game::Player;

/// Contract violations on the board. A full column is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("cannot undo in empty column {0}")]
    EmptyColumn(usize),
}

/// Errors from choosing the computer's move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no legal move: every column is full")]
    NoLegalMove,

    #[error("board error while probing: {0}")]
    Board(#[from] BoardError),
}

/// Errors from playing a turn in a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is not {}'s turn", .0.name())]
    NotYourTurn(Player),

    #[error("game is over, reset to play again")]
    GameOver,

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("move selection failed: {0}")]
    Select(#[from] SelectError),
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
}

/// Errors that can occur when installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        assert_eq!(
            BoardError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
        assert_eq!(
            BoardError::EmptyColumn(2).to_string(),
            "cannot undo in empty column 2"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::NotYourTurn(Player::Computer);
        assert_eq!(err.to_string(), "it is not Computer's turn");

        let err = SessionError::from(SelectError::NoLegalMove);
        assert_eq!(
            err.to_string(),
            "move selection failed: no legal move: every column is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("pacing.notification_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: pacing.notification_ms must be > 0"
        );
    }
}
