use std::path::PathBuf;

/// Reasons the board refuses a placement. Columns are reported one-based,
/// as they were requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("column {0} is outside 1..=7")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors from a single turn-controller step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that end a game loop early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_error_display() {
        assert_eq!(
            PlaceError::InvalidColumn(0).to_string(),
            "column 0 is outside 1..=7"
        );
        assert_eq!(PlaceError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_move_error_is_transparent() {
        let err = MoveError::from(PlaceError::ColumnFull(5));
        assert_eq!(err.to_string(), "column 5 is full");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display colors must differ".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display colors must differ"
        );
    }
}
