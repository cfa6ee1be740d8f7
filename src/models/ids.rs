//! Identifier newtypes for teams and pools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned team identifier. Must be a positive integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Team IDs are positive; zero is reserved as "unset" by roster sheets.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeamId({})", self.0)
    }
}

impl From<u32> for TeamId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Pool label, e.g. "A" or "B".
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolId(String);

impl PoolId {
    /// Create a pool label. Surrounding whitespace is not significant.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolId({})", self.0)
    }
}

impl From<String> for PoolId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PoolId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
