//! Roster ingestion.
//!
//! Turns flat roster rows (one per team, as in a registration sheet) into
//! validated teams. Invalid rows are never dropped silently: each one is
//! reported back with the reason it was rejected.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::LeagueConfig;
use crate::league::{League, LeagueError};
use crate::models::{Player, Team, TeamError, TeamId};

/// One registration row: team identity plus three rated players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub id: u32,
    pub team: String,
    pub pool: String,
    pub p1: String,
    #[serde(alias = "dupr1")]
    pub rating1: f64,
    pub p2: String,
    #[serde(alias = "dupr2")]
    pub rating2: f64,
    pub p3: String,
    #[serde(alias = "dupr3")]
    pub rating3: f64,
}

impl RosterRow {
    /// Players listed on this row, in column order.
    pub fn players(&self) -> Vec<Player> {
        vec![
            Player::new(&self.p1, self.rating1),
            Player::new(&self.p2, self.rating2),
            Player::new(&self.p3, self.rating3),
        ]
    }

    /// Sum of the row's ratings.
    pub fn total_rating(&self) -> f64 {
        self.rating1 + self.rating2 + self.rating3
    }

    /// Build a team from this row.
    pub fn to_team(&self, config: &LeagueConfig) -> Result<Team, TeamError> {
        Team::with_config(
            self.id,
            self.team.as_str(),
            self.pool.as_str(),
            self.players(),
            config,
        )
    }
}

/// Why a roster row was not accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    EmptyName,
    RatingCapExceeded { total: f64, cap: f64 },
    InvalidRoster { message: String },
    DuplicateTeamId { id: TeamId },
}

impl From<TeamError> for RejectReason {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::EmptyName => RejectReason::EmptyName,
            TeamError::RatingCapExceeded { total, cap, .. } => {
                RejectReason::RatingCapExceeded { total, cap }
            }
            other => RejectReason::InvalidRoster {
                message: other.to_string(),
            },
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::EmptyName => write!(f, "team name is empty"),
            RejectReason::RatingCapExceeded { total, cap } => {
                write!(f, "rating total {:.2} exceeds cap {:.2}", total, cap)
            }
            RejectReason::InvalidRoster { message } => write!(f, "{}", message),
            RejectReason::DuplicateTeamId { id } => write!(f, "team id {} already used", id),
        }
    }
}

/// A row that did not become a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// Zero-based position in the input
    pub row: usize,
    pub team: String,
    pub reason: RejectReason,
}

/// Outcome of ingesting a roster table.
#[derive(Debug, Clone, Default)]
pub struct RosterReport {
    pub accepted: Vec<Team>,
    pub rejected: Vec<RejectedRow>,
}

impl RosterReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Build a league from the accepted teams.
    pub fn into_league(self, config: LeagueConfig) -> Result<League, LeagueError> {
        League::with_config(self.accepted, config)
    }
}

/// Validate every row, splitting them into accepted teams and rejections.
pub fn ingest_roster(rows: &[RosterRow], config: &LeagueConfig) -> RosterReport {
    let mut report = RosterReport::default();
    let mut seen_ids = HashSet::new();

    for (row, entry) in rows.iter().enumerate() {
        let outcome = entry.to_team(config).map_err(RejectReason::from).and_then(|team| {
            if seen_ids.insert(team.id()) {
                Ok(team)
            } else {
                Err(RejectReason::DuplicateTeamId { id: team.id() })
            }
        });

        match outcome {
            Ok(team) => report.accepted.push(team),
            Err(reason) => {
                warn!("Rejected roster row {} ({}): {}", row, entry.team, reason);
                report.rejected.push(RejectedRow {
                    row,
                    team: entry.team.clone(),
                    reason,
                });
            }
        }
    }

    info!(
        "Roster ingested: {} accepted, {} rejected",
        report.accepted.len(),
        report.rejected.len()
    );
    report
}

/// Build a league from rows, failing on the first invalid row instead of
/// skipping it.
pub fn build_league(rows: &[RosterRow], config: LeagueConfig) -> Result<League, LeagueError> {
    let teams = rows
        .iter()
        .map(|row| row.to_team(&config))
        .collect::<Result<Vec<_>, _>>()?;
    League::with_config(teams, config)
}
