use std::path::Path;

use crate::error::ConfigError;
use crate::game::{PlayerKind, Rules, Variant};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
    pub search: SearchSettings,
    pub sim: SimSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameSettings::default(),
            search: SearchSettings::default(),
            sim: SimSettings::default(),
        }
    }
}

/// Board shape, rule variant, and who controls each side.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub pits_per_side: usize,
    pub stones_per_pit: u32,
    pub variant: Variant,
    pub player1: PlayerKind,
    pub player2: PlayerKind,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            pits_per_side: 6,
            stones_per_pit: 4,
            variant: Variant::Kalah,
            player1: PlayerKind::Search,
            player2: PlayerKind::Random,
        }
    }
}

impl GameSettings {
    /// The rule parameters the engine consumes.
    pub fn rules(&self) -> Rules {
        Rules {
            pits_per_side: self.pits_per_side,
            stones_per_pit: self.stones_per_pit,
            variant: self.variant,
        }
    }
}

/// Per-side minimax depth for search-driven players.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub depth_player1: u32,
    pub depth_player2: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            depth_player1: 6,
            depth_player2: 6,
        }
    }
}

/// Batch-run controls and report options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub games: usize,
    /// Consecutive captureless moves before a game is declared looping
    /// and its remaining stones split evenly between the stores.
    pub stalemate_threshold: u32,
    /// Write each game's pit sequence into the report.
    pub record_moves: bool,
    /// Write per-game score rows into the report.
    pub record_stats: bool,
    /// Print every position to stdout as it is played.
    pub show_board: bool,
    /// Base seed for reproducible runs; unseeded when absent.
    pub seed: Option<u64>,
}

impl Default for SimSettings {
    fn default() -> Self {
        SimSettings {
            games: 1000,
            stalemate_threshold: 1000,
            record_moves: false,
            record_stats: false,
            show_board: false,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.pits_per_side == 0 {
            return Err(ConfigError::Validation(
                "game.pits_per_side must be > 0".into(),
            ));
        }
        if self.game.stones_per_pit == 0 {
            return Err(ConfigError::Validation(
                "game.stones_per_pit must be > 0".into(),
            ));
        }
        if self.search.depth_player1 == 0 || self.search.depth_player2 == 0 {
            return Err(ConfigError::Validation(
                "search depths must be >= 1".into(),
            ));
        }
        if self.sim.games == 0 {
            return Err(ConfigError::Validation("sim.games must be > 0".into()));
        }
        if self.sim.stalemate_threshold == 0 {
            return Err(ConfigError::Validation(
                "sim.stalemate_threshold must be > 0".into(),
            ));
        }

        // The evaluator is only defined for Kalah, so search-driven
        // players cannot be fielded under Wari rules.
        let searching = self.game.player1 == PlayerKind::Search
            || self.game.player2 == PlayerKind::Search;
        if self.game.variant == Variant::Wari && searching {
            return Err(ConfigError::Validation(
                "search players are not supported under wari rules".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for
    /// creating example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
variant = "wari"
player1 = "random"
player2 = "random"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.variant, Variant::Wari);
        // Other fields should be defaults
        assert_eq!(config.game.pits_per_side, 6);
        assert_eq!(config.sim.games, 1000);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.stones_per_pit, 4);
        assert_eq!(config.search.depth_player1, 6);
        assert_eq!(config.sim.stalemate_threshold, 1000);
    }

    #[test]
    fn test_validation_rejects_zero_pits() {
        let mut config = AppConfig::default();
        config.game.pits_per_side = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_stones() {
        let mut config = AppConfig::default();
        config.game.stones_per_pit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth_player2 = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.sim.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_search_under_wari() {
        let mut config = AppConfig::default();
        config.game.variant = Variant::Wari;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wari_without_search_players_is_valid() {
        let mut config = AppConfig::default();
        config.game.variant = Variant::Wari;
        config.game.player1 = PlayerKind::Random;
        config.game.player2 = PlayerKind::Human;
        config.validate().unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.sim.games, 1000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[sim]
games = 500
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.sim.games, 500);
        assert_eq!(config.sim.seed, Some(42));
        // Others are defaults
        assert_eq!(config.game.pits_per_side, 6);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[game]\npits_per_side = 0\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
