//! Player model: a rated roster member embedded in a team.

use serde::{Deserialize, Serialize};

/// A single rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within the team
    pub name: String,

    /// Skill rating (DUPR-style, non-negative)
    pub rating: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            rating,
        }
    }

    /// A rating must be a finite, non-negative number.
    pub fn has_valid_rating(&self) -> bool {
        self.rating.is_finite() && self.rating >= 0.0
    }
}
