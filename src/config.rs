use std::path::Path;

use tracing::warn;

use crate::bot::BotKind;
use crate::error::ConfigError;
use crate::game::Board;

/// Board dimensions and seat count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub num_players: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            num_players: 2,
        }
    }
}

/// Bot-vs-bot simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_games: usize,
    pub player1: BotKind,
    pub player2: BotKind,
    /// Swap which bot moves first on every other game.
    pub alternate_first: bool,
    /// Base seed for reproducible runs; drawn from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Worker threads: 1 runs sequentially, 0 lets rayon decide.
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 10_000,
            player1: BotKind::Random,
            player2: BotKind::Random,
            alternate_first: false,
            seed: None,
            threads: 1,
        }
    }
}

/// Interactive game settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Pause before a bot announces its move, in milliseconds.
    pub bot_delay_ms: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig { bot_delay_ms: 500 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub play: PlayConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::from_config(&self.board)?;

        if self.simulation.num_games == 0 {
            return Err(ConfigError::Validation(
                "simulation.num_games must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Extra checks for running bot-vs-bot simulations, which seat exactly two
    /// bots.
    pub fn validate_for_simulation(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.board.num_players != 2 {
            return Err(ConfigError::Validation(
                "simulation requires board.num_players = 2".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
