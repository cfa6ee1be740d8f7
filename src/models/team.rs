//! Team model: roster, rating cap validation and per-season tracking.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use super::{Player, PoolId, TeamId};
use crate::config::LeagueConfig;

/// Errors raised while constructing a team.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeamError {
    #[error("Team {team} rating total {total:.2} exceeds cap {cap:.2}")]
    RatingCapExceeded { team: String, total: f64, cap: f64 },

    #[error("Team id must be a positive integer")]
    InvalidId,

    #[error("Team name must not be empty")]
    EmptyName,

    #[error("Team {0} has no pool assigned")]
    EmptyPool(String),

    #[error("Team {team} must have exactly {expected} players, got {actual}")]
    WrongPlayerCount {
        team: String,
        expected: usize,
        actual: usize,
    },

    #[error("Team {team} has an invalid player: {reason}")]
    InvalidPlayer { team: String, reason: String },
}

/// A registered team.
///
/// Identity, pool and roster are fixed at construction. The tracking
/// counters only change through [`Team::record_match`].
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    id: TeamId,
    name: String,
    pool: PoolId,
    players: Vec<Player>,
    total_rating: f64,

    matches_played: u32,
    wins: u32,
    score_differential: i64,
    player_counts: HashMap<String, u32>,
}

impl Team {
    /// Create a team using the default league rules (3 players, cap 11.0).
    pub fn new(
        id: u32,
        name: impl Into<String>,
        pool: impl Into<PoolId>,
        players: Vec<Player>,
    ) -> Result<Self, TeamError> {
        Self::with_config(id, name, pool, players, &LeagueConfig::default())
    }

    /// Create a team, validating the roster against the given league rules.
    pub fn with_config(
        id: u32,
        name: impl Into<String>,
        pool: impl Into<PoolId>,
        players: Vec<Player>,
        config: &LeagueConfig,
    ) -> Result<Self, TeamError> {
        let id = TeamId::new(id);
        let name = name.into().trim().to_string();
        let pool = pool.into();

        if !id.is_valid() {
            return Err(TeamError::InvalidId);
        }
        if name.is_empty() {
            return Err(TeamError::EmptyName);
        }
        if pool.is_empty() {
            return Err(TeamError::EmptyPool(name));
        }
        if players.len() != config.players_per_team {
            return Err(TeamError::WrongPlayerCount {
                team: name,
                expected: config.players_per_team,
                actual: players.len(),
            });
        }

        let mut seen = HashSet::new();
        for player in &players {
            if player.name.is_empty() {
                return Err(TeamError::InvalidPlayer {
                    team: name,
                    reason: "player name is empty".to_string(),
                });
            }
            if !player.has_valid_rating() {
                return Err(TeamError::InvalidPlayer {
                    reason: format!("{} has rating {}", player.name, player.rating),
                    team: name,
                });
            }
            if !seen.insert(player.name.as_str()) {
                return Err(TeamError::InvalidPlayer {
                    reason: format!("{} is listed twice", player.name),
                    team: name,
                });
            }
        }

        let total_rating: f64 = players.iter().map(|p| p.rating).sum();
        if total_rating > config.rating_cap {
            return Err(TeamError::RatingCapExceeded {
                team: name,
                total: total_rating,
                cap: config.rating_cap,
            });
        }

        let mut team = Self {
            id,
            name,
            pool,
            players,
            total_rating,
            matches_played: 0,
            wins: 0,
            score_differential: 0,
            player_counts: HashMap::new(),
        };
        team.reset_tracking();
        Ok(team)
    }

    /// Zero every tracking counter, including per-player participation.
    pub fn reset_tracking(&mut self) {
        self.matches_played = 0;
        self.wins = 0;
        self.score_differential = 0;
        self.player_counts = self
            .players
            .iter()
            .map(|p| (p.name.clone(), 0))
            .collect();
    }

    /// Apply one played match from this team's point of view.
    ///
    /// Equal scores count as played but not won. Callers validate the
    /// lineup against the roster beforehand.
    pub fn record_match(&mut self, scored: u32, conceded: u32, lineup: &[String]) {
        self.matches_played += 1;
        self.score_differential += i64::from(scored) - i64::from(conceded);
        if scored > conceded {
            self.wins += 1;
        }
        for name in lineup {
            *self.player_counts.entry(name.clone()).or_insert(0) += 1;
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pool(&self) -> &PoolId {
        &self.pool
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn total_rating(&self) -> f64 {
        self.total_rating
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }

    pub fn score_differential(&self) -> i64 {
        self.score_differential
    }

    /// Whether `name` is on this team's roster.
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Number of matches the named player has appeared in.
    pub fn player_count(&self, name: &str) -> u32 {
        self.player_counts.get(name).copied().unwrap_or(0)
    }
}
