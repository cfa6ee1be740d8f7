//! Core data models for the league engine.

mod fixture;
mod ids;
mod player;
mod stats;
mod team;

pub use fixture::*;
pub use ids::*;
pub use player::*;
pub use stats::*;
pub use team::*;
