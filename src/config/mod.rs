//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound for `points_per_win`.
pub const MAX_POINTS_PER_WIN: u32 = 100;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// League rules: roster shape, scoring and rotation targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Maximum allowed sum of a team's player ratings
    #[serde(default = "default_rating_cap")]
    pub rating_cap: f64,

    /// Players on every roster
    #[serde(default = "default_players_per_team")]
    pub players_per_team: usize,

    /// Players fielded per side in a match
    #[serde(default = "default_lineup_size")]
    pub lineup_size: usize,

    /// Highest score accepted for either side
    #[serde(default = "default_max_score")]
    pub max_score: u32,

    /// Standings points awarded per win
    #[serde(default = "default_points_per_win")]
    pub points_per_win: u32,

    /// Minimum appearances each player should reach
    #[serde(default = "default_rotation_min")]
    pub rotation_min: u32,

    /// Maximum appearances each player should reach
    #[serde(default = "default_rotation_max")]
    pub rotation_max: u32,
}

fn default_rating_cap() -> f64 {
    11.0
}

fn default_players_per_team() -> usize {
    3
}

fn default_lineup_size() -> usize {
    2
}

fn default_max_score() -> u32 {
    50
}

fn default_points_per_win() -> u32 {
    2
}

fn default_rotation_min() -> u32 {
    3
}

fn default_rotation_max() -> u32 {
    4
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            rating_cap: default_rating_cap(),
            players_per_team: default_players_per_team(),
            lineup_size: default_lineup_size(),
            max_score: default_max_score(),
            points_per_win: default_points_per_win(),
            rotation_min: default_rotation_min(),
            rotation_max: default_rotation_max(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub league: LeagueConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            league: LeagueConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.league.validate()?;

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl LeagueConfig {
    /// Validate the league rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rating_cap.is_finite() || self.rating_cap < 0.0 {
            return Err(ConfigError::ValidationError(
                "Rating cap must be a non-negative number".to_string(),
            ));
        }

        if self.players_per_team == 0 {
            return Err(ConfigError::ValidationError(
                "Teams need at least one player".to_string(),
            ));
        }

        if self.lineup_size == 0 || self.lineup_size > self.players_per_team {
            return Err(ConfigError::ValidationError(format!(
                "Lineup size must be between 1 and {}",
                self.players_per_team
            )));
        }

        if self.points_per_win == 0 || self.points_per_win > MAX_POINTS_PER_WIN {
            return Err(ConfigError::ValidationError(format!(
                "Points per win must be between 1 and {}",
                MAX_POINTS_PER_WIN
            )));
        }

        if self.max_score == 0 {
            return Err(ConfigError::ValidationError(
                "Max score must be greater than 0".to_string(),
            ));
        }

        if self.rotation_min > self.rotation_max {
            return Err(ConfigError::ValidationError(
                "Rotation minimum must not exceed rotation maximum".to_string(),
            ));
        }

        Ok(())
    }
}
