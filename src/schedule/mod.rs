//! Round-robin fixture generation.
//!
//! Every pool is a single round-robin: each unordered pair of teams meets
//! once. Fixtures are emitted in lexicographic combination order over the
//! pool's stored team order, and each one is labelled with a round number
//! from the circle method so that no team plays twice in a round.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Fixture, PoolId, Team, TeamId};

/// A pool and its members in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub team_ids: Vec<TeamId>,
}

impl Pool {
    /// Number of fixtures a full round-robin of this pool needs.
    pub fn fixture_count(&self) -> usize {
        let n = self.team_ids.len();
        n * n.saturating_sub(1) / 2
    }

    /// Number of rounds in the circle-method schedule.
    pub fn round_count(&self) -> usize {
        let n = self.team_ids.len();
        match n {
            0 | 1 => 0,
            n if n % 2 == 0 => n - 1,
            n => n,
        }
    }
}

/// Group teams into pools, keeping pools and members in first-seen order.
pub fn group_pools<'a, I>(teams: I) -> Vec<Pool>
where
    I: IntoIterator<Item = &'a Team>,
{
    let mut pools: Vec<Pool> = Vec::new();
    for team in teams {
        match pools.iter_mut().find(|p| &p.id == team.pool()) {
            Some(pool) => pool.team_ids.push(team.id()),
            None => pools.push(Pool {
                id: team.pool().clone(),
                team_ids: vec![team.id()],
            }),
        }
    }
    pools
}

/// Generate every fixture for the given pools.
pub fn generate_fixtures(pools: &[Pool]) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(pools.iter().map(Pool::fixture_count).sum());

    for pool in pools {
        let rounds = circle_rounds(pool.team_ids.len());
        let ids = &pool.team_ids;

        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let round = rounds.get(&(i, j)).copied().unwrap_or(0);
                fixtures.push(Fixture::new(pool.id.clone(), round, ids[i], ids[j]));
            }
        }

        debug!(
            "Pool {}: {} teams, {} fixtures over {} rounds",
            pool.id,
            ids.len(),
            pool.fixture_count(),
            pool.round_count()
        );
    }

    fixtures
}

/// Round number (1-based) for each position pair `(i, j)` with `i < j`.
///
/// Position 0 stays fixed while the rest rotate one step per round. Odd
/// sizes get a phantom slot; whoever meets it has a bye that round.
fn circle_rounds(n: usize) -> HashMap<(usize, usize), u32> {
    let mut rounds = HashMap::new();
    if n < 2 {
        return rounds;
    }

    let slots = if n % 2 == 0 { n } else { n + 1 };
    let mut order: Vec<usize> = (0..slots).collect();

    for round in 0..(slots - 1) {
        for k in 0..slots / 2 {
            let a = order[k];
            let b = order[slots - 1 - k];
            if a < n && b < n {
                rounds.insert((a.min(b), a.max(b)), round as u32 + 1);
            }
        }
        order[1..].rotate_right(1);
    }

    rounds
}
