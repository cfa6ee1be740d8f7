//! Fixture model: one pairing of two teams within a pool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PoolId, TeamId};

/// A single round-robin pairing.
///
/// Fixtures are addressed by their position in the league's fixture list;
/// there is no separate identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Pool both teams belong to
    pub pool: PoolId,

    /// Round number within the pool (1-based)
    pub round: u32,

    /// Home team (first in pool order)
    pub home_team_id: TeamId,

    /// Away team
    pub away_team_id: TeamId,

    /// Whether a result has been recorded
    pub played: bool,

    pub score_home: Option<u32>,
    pub score_away: Option<u32>,

    /// Home players fielded, drawn from the home roster
    pub lineup_home: Vec<String>,

    /// Away players fielded, drawn from the away roster
    pub lineup_away: Vec<String>,
}

impl Fixture {
    /// Create an unplayed fixture.
    pub fn new(pool: PoolId, round: u32, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Self {
            pool,
            round,
            home_team_id,
            away_team_id,
            played: false,
            score_home: None,
            score_away: None,
            lineup_home: Vec::new(),
            lineup_away: Vec::new(),
        }
    }
}

/// A result submitted for a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSubmission {
    /// Position of the fixture in the league's fixture list
    pub fixture_index: usize,

    /// Expected home team; checked against the fixture when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_id: Option<TeamId>,

    /// Expected away team; checked against the fixture when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_id: Option<TeamId>,

    pub score_home: u32,
    pub score_away: u32,
    pub lineup_home: Vec<String>,
    pub lineup_away: Vec<String>,
}

impl ResultSubmission {
    pub fn new(
        fixture_index: usize,
        score_home: u32,
        score_away: u32,
        lineup_home: &[&str],
        lineup_away: &[&str],
    ) -> Self {
        Self {
            fixture_index,
            home_team_id: None,
            away_team_id: None,
            score_home,
            score_away,
            lineup_home: lineup_home.iter().map(|s| s.to_string()).collect(),
            lineup_away: lineup_away.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Pin the submission to a specific pairing.
    pub fn with_teams(mut self, home: TeamId, away: TeamId) -> Self {
        self.home_team_id = Some(home);
        self.away_team_id = Some(away);
        self
    }
}

/// Entry in the results log, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub fixture_index: usize,

    /// Fixture as it stood right after the result was applied
    pub fixture: Fixture,

    /// When the result was accepted
    pub recorded_at: DateTime<Utc>,
}

/// Flat fixture row for tables and the Matches sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRow {
    pub index: usize,
    pub pool: PoolId,
    pub round: u32,
    pub home_team_id: TeamId,
    pub home_team: String,
    pub away_team_id: TeamId,
    pub away_team: String,
    pub played: bool,
    pub score_home: Option<u32>,
    pub score_away: Option<u32>,
    pub lineup_home: Vec<String>,
    pub lineup_away: Vec<String>,
}
