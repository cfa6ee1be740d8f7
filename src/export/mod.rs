//! Export view of a league.
//!
//! Collects every table a workbook writer needs: the team roster, the
//! fixture list, and per pool the standings and player tracker. Writing
//! them to a file is left to the caller (see `storage::write_export`).

use serde::{Deserialize, Serialize};

use crate::league::{League, LeagueError};
use crate::models::{FixtureRow, PoolId, StandingsRow, TeamRow, TrackerRow};

pub const TEAMS_SHEET: &str = "Teams";
pub const MATCHES_SHEET: &str = "Matches";

/// Standings and player tables for one pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolExport {
    pub pool: PoolId,
    pub standings: Vec<StandingsRow>,
    pub players: Vec<TrackerRow>,
}

impl PoolExport {
    pub fn standings_sheet(&self) -> String {
        format!("Standings_{}", self.pool)
    }

    pub fn players_sheet(&self) -> String {
        format!("Players_{}", self.pool)
    }
}

/// Every exported table, pools sorted by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueExport {
    pub teams: Vec<TeamRow>,
    pub matches: Vec<FixtureRow>,
    pub pools: Vec<PoolExport>,
}

impl LeagueExport {
    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        let mut names = vec![TEAMS_SHEET.to_string(), MATCHES_SHEET.to_string()];
        for pool in &self.pools {
            names.push(pool.standings_sheet());
            names.push(pool.players_sheet());
        }
        names
    }
}

/// Snapshot a league into export tables.
pub fn build_export(league: &League) -> Result<LeagueExport, LeagueError> {
    let mut pool_ids = league.pool_ids();
    pool_ids.sort();

    let pools = pool_ids
        .into_iter()
        .map(|pool| {
            Ok(PoolExport {
                standings: league.standings(&pool)?,
                players: league.player_tracker(&pool)?,
                pool,
            })
        })
        .collect::<Result<Vec<_>, LeagueError>>()?;

    Ok(LeagueExport {
        teams: league.team_rows(),
        matches: league.fixture_rows(None)?,
        pools,
    })
}
