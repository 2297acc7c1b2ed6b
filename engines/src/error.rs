use std::path::PathBuf;

use reversi::GameError;

/// Errors that can occur when loading a match configuration.
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

/// Errors that can occur while engines play each other.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("engine {engine} made an illegal move: {source}")]
    IllegalMove { engine: String, source: GameError },

    #[error("engine {engine} chose no move although legal moves exist")]
    NoMoveChosen { engine: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
