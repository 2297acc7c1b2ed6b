use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::greedy::GreedyEngine;
use crate::random::RandomEngine;
use crate::Engine;

/// Engines that can be named in a match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Greedy,
    Random,
}

impl EngineKind {
    /// Instantiate the engine; `seed` only matters for randomized engines.
    pub fn build(self, seed: u64) -> Box<dyn Engine> {
        match self {
            EngineKind::Greedy => Box::new(GreedyEngine),
            EngineKind::Random => Box::new(RandomEngine::seeded(seed)),
        }
    }
}

/// Self-play match configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Base seed; each game derives its own engine seeds from it
    pub seed: u64,
    pub black: EngineKind,
    pub white: EngineKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            games: 1,
            seed: 0,
            black: EngineKind::Greedy,
            white: EngineKind::Random,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.black, EngineKind::Greedy);
        assert_eq!(config.white, EngineKind::Random);
    }

    #[test]
    fn test_parse_full_config() {
        let config = MatchConfig::from_toml_str(
            r#"
            games = 10
            seed = 42
            black = "random"
            white = "greedy"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            MatchConfig {
                games: 10,
                seed: 42,
                black: EngineKind::Random,
                white: EngineKind::Greedy,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = MatchConfig::from_toml_str("games = 3").unwrap();
        assert_eq!(config.games, 3);
        assert_eq!(config.seed, 0);
        assert_eq!(config.black, EngineKind::Greedy);
    }

    #[test]
    fn test_unknown_engine_is_a_parse_error() {
        let err = MatchConfig::from_toml_str(r#"black = "minimax""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_zero_games_fails_validation() {
        let err = MatchConfig::from_toml_str("games = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "games = 2\nwhite = \"greedy\"").unwrap();

        let config = MatchConfig::load(file.path()).unwrap();
        assert_eq!(config.games, 2);
        assert_eq!(config.white, EngineKind::Greedy);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            MatchConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(
            MatchConfig::load_or_default(&path).unwrap(),
            MatchConfig::default()
        );
    }

    #[test]
    fn test_build_engines() {
        assert_eq!(EngineKind::Greedy.build(0).name(), "Greedy");
        assert_eq!(EngineKind::Random.build(7).name(), "Random");
    }
}
