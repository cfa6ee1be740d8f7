//! # Pickleball League
//!
//! A round-robin pickleball league engine: pool-based fixture generation,
//! result recording with lineup checks, standings and player rotation.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, players, fixtures, table rows)
//! - **schedule**: Pool grouping and round-robin fixture generation
//! - **league**: The league engine owning all session state
//! - **calculate**: Standings and rotation tracker computation
//! - **ingest**: Roster row validation with explicit rejections
//! - **export**: Multi-sheet export view
//! - **storage**: JSONL roster, results log and sheet files
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod export;
pub mod ingest;
pub mod league;
pub mod models;
pub mod schedule;
pub mod storage;

pub use league::{League, LeagueError};
pub use models::*;

/// Parse a comma-separated lineup such as `"Ann, Bo"` into player names.
pub fn parse_lineup(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
