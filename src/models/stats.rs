//! Derived table rows: standings, player rotation and roster export.

use serde::{Deserialize, Serialize};

use super::{PoolId, TeamId};

/// One row of a pool standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// Dense rank over (points, score differential)
    pub rank: u32,
    pub team_id: TeamId,
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub score_differential: i64,
}

/// One row of the player rotation tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerRow {
    pub team_id: TeamId,
    pub team: String,
    pub player: String,
    pub played: u32,

    /// Appearances still needed to reach the minimum fairness target
    pub remaining_min: u32,

    /// Appearances left before the maximum fairness target is reached
    pub remaining_max: u32,
}

/// Flat roster row for the Teams sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: TeamId,
    pub team: String,
    pub pool: PoolId,
    pub players: Vec<String>,
    pub ratings: Vec<f64>,
    pub total_rating: f64,
}
