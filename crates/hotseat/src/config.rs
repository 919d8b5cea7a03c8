//! Configuration for the hotseat front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use hotseat_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Characters drawn for each player's marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarksConfig {
    /// Mark for Player 1.
    #[serde(default = "default_player_one_mark")]
    player_one: String,

    /// Mark for Player 2.
    #[serde(default = "default_player_two_mark")]
    player_two: String,
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one_mark(),
            player_two: default_player_two_mark(),
        }
    }
}

/// Front-end configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HotseatConfig {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// File receiving log output (stdout belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Player marks.
    #[serde(default)]
    marks: MarksConfig,
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("hotseat.log")
}

/// Player 1 plays "O", Player 2 plays "X".
fn default_mark(player: Player) -> char {
    match player {
        Player::One => 'O',
        Player::Two => 'X',
    }
}

fn default_player_one_mark() -> String {
    default_mark(Player::One).to_string()
}

fn default_player_two_mark() -> String {
    default_mark(Player::Two).to_string()
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_file: default_log_file(),
            marks: MarksConfig::default(),
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Returns the character drawn for `player`.
    pub fn mark_for(&self, player: Player) -> char {
        let mark = match player {
            Player::One => &self.marks.player_one,
            Player::Two => &self.marks.player_two,
        };
        mark.chars().next().unwrap_or_else(|| default_mark(player))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, mark) in [
            ("player_one", &self.marks.player_one),
            ("player_two", &self.marks.player_two),
        ] {
            let mut chars = mark.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() && !c.is_control() => {}
                _ => {
                    return Err(ConfigError::new(format!(
                        "marks.{} must be a single visible character, got {:?}",
                        name, mark
                    )));
                }
            }
        }

        if self.marks.player_one == self.marks.player_two {
            return Err(ConfigError::new(format!(
                "marks.player_one and marks.player_two must differ (both {:?})",
                self.marks.player_one
            )));
        }

        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
