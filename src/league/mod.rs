//! League engine.
//!
//! Owns every team, pool, fixture and result for one session. Results are
//! recorded through [`League::enter_result`], the only path that mutates a
//! fixture or a team's counters after construction.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculate;
use crate::config::LeagueConfig;
use crate::models::{
    Fixture, FixtureRow, PoolId, ResultRecord, ResultSubmission, StandingsRow, Team, TeamError,
    TeamId, TeamRow, TrackerRow,
};
use crate::schedule::{self, Pool};

/// Errors returned by league operations. None of them leave partial state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeagueError {
    #[error("Fixture index {index} is out of range (league has {count} fixtures)")]
    InvalidFixtureIndex { index: usize, count: usize },

    #[error("Fixture {0} already has a result")]
    AlreadyPlayed(usize),

    #[error("Invalid lineup for {team}: {reason}")]
    InvalidLineup { team: String, reason: String },

    #[error("Score {score} is outside 0..={max}")]
    ScoreOutOfRange { score: u32, max: u32 },

    #[error("Unknown pool: {0}")]
    UnknownPool(PoolId),

    #[error("Duplicate team id: {0}")]
    DuplicateTeamId(TeamId),

    #[error("{0}")]
    InvalidConfig(String),

    #[error("Fixture {index} is {expected_home} v {expected_away}, not {home} v {away}")]
    FixtureMismatch {
        index: usize,
        expected_home: TeamId,
        expected_away: TeamId,
        home: TeamId,
        away: TeamId,
    },

    #[error(transparent)]
    Team(#[from] TeamError),
}

/// A round-robin league session.
#[derive(Debug, Clone)]
pub struct League {
    config: LeagueConfig,
    teams: HashMap<TeamId, Team>,
    team_order: Vec<TeamId>,
    pools: Vec<Pool>,
    fixtures: Vec<Fixture>,
    results: Vec<ResultRecord>,
}

impl League {
    /// Build a league with the default rules.
    pub fn new(teams: Vec<Team>) -> Result<Self, LeagueError> {
        Self::with_config(teams, LeagueConfig::default())
    }

    /// Build a league: group pools, then generate every fixture once.
    pub fn with_config(teams: Vec<Team>, config: LeagueConfig) -> Result<Self, LeagueError> {
        config
            .validate()
            .map_err(|e| LeagueError::InvalidConfig(e.to_string()))?;

        let mut by_id = HashMap::with_capacity(teams.len());
        let mut team_order = Vec::with_capacity(teams.len());

        for team in teams {
            let id = team.id();
            if by_id.contains_key(&id) {
                return Err(LeagueError::DuplicateTeamId(id));
            }
            team_order.push(id);
            by_id.insert(id, team);
        }

        let pools = schedule::group_pools(team_order.iter().filter_map(|id| by_id.get(id)));
        let fixtures = schedule::generate_fixtures(&pools);

        info!(
            "League built: {} teams, {} pools, {} fixtures",
            team_order.len(),
            pools.len(),
            fixtures.len()
        );

        Ok(Self {
            config,
            teams: by_id,
            team_order,
            pools,
            fixtures,
            results: Vec::new(),
        })
    }

    /// Record the result of one fixture.
    ///
    /// Everything is validated before anything is written, so a rejected
    /// submission leaves the league untouched.
    pub fn enter_result(
        &mut self,
        index: usize,
        score_home: u32,
        score_away: u32,
        lineup_home: &[String],
        lineup_away: &[String],
    ) -> Result<&Fixture, LeagueError> {
        self.check_entry(index, (None, None), score_home, score_away, lineup_home, lineup_away)?;
        Ok(self.apply(index, score_home, score_away, lineup_home, lineup_away))
    }

    /// Record a result described by a [`ResultSubmission`].
    ///
    /// When the submission names its teams they must match the fixture.
    pub fn submit(&mut self, submission: &ResultSubmission) -> Result<&Fixture, LeagueError> {
        self.check_result(submission)?;
        Ok(self.apply(
            submission.fixture_index,
            submission.score_home,
            submission.score_away,
            &submission.lineup_home,
            &submission.lineup_away,
        ))
    }

    /// Validate a submission without recording it.
    pub fn check_result(&self, submission: &ResultSubmission) -> Result<(), LeagueError> {
        self.check_entry(
            submission.fixture_index,
            (submission.home_team_id, submission.away_team_id),
            submission.score_home,
            submission.score_away,
            &submission.lineup_home,
            &submission.lineup_away,
        )
    }

    /// Validate a submission and stamp it with the fixture's team ids, so a
    /// stored copy cannot later land on a different pairing.
    pub fn pin_result(
        &self,
        submission: ResultSubmission,
    ) -> Result<ResultSubmission, LeagueError> {
        self.check_result(&submission)?;
        let fixture = self.fixtures.get(submission.fixture_index).ok_or(
            LeagueError::InvalidFixtureIndex {
                index: submission.fixture_index,
                count: self.fixtures.len(),
            },
        )?;
        let (home, away) = (fixture.home_team_id, fixture.away_team_id);
        Ok(submission.with_teams(home, away))
    }

    fn check_entry(
        &self,
        index: usize,
        pinned: (Option<TeamId>, Option<TeamId>),
        score_home: u32,
        score_away: u32,
        lineup_home: &[String],
        lineup_away: &[String],
    ) -> Result<(), LeagueError> {
        let fixture = self
            .fixtures
            .get(index)
            .ok_or(LeagueError::InvalidFixtureIndex {
                index,
                count: self.fixtures.len(),
            })?;

        if fixture.played {
            return Err(LeagueError::AlreadyPlayed(index));
        }

        let home = pinned.0.unwrap_or(fixture.home_team_id);
        let away = pinned.1.unwrap_or(fixture.away_team_id);
        if home != fixture.home_team_id || away != fixture.away_team_id {
            return Err(LeagueError::FixtureMismatch {
                index,
                expected_home: fixture.home_team_id,
                expected_away: fixture.away_team_id,
                home,
                away,
            });
        }

        for score in [score_home, score_away] {
            if score > self.config.max_score {
                return Err(LeagueError::ScoreOutOfRange {
                    score,
                    max: self.config.max_score,
                });
            }
        }

        self.validate_lineup(fixture.home_team_id, lineup_home)?;
        self.validate_lineup(fixture.away_team_id, lineup_away)?;
        Ok(())
    }

    /// Write a validated result into the fixture, both teams and the log.
    fn apply(
        &mut self,
        index: usize,
        score_home: u32,
        score_away: u32,
        lineup_home: &[String],
        lineup_away: &[String],
    ) -> &Fixture {
        let fixture = &mut self.fixtures[index];
        fixture.score_home = Some(score_home);
        fixture.score_away = Some(score_away);
        fixture.lineup_home = lineup_home.to_vec();
        fixture.lineup_away = lineup_away.to_vec();
        fixture.played = true;
        let (home_id, away_id) = (fixture.home_team_id, fixture.away_team_id);

        if let Some(home) = self.teams.get_mut(&home_id) {
            home.record_match(score_home, score_away, lineup_home);
        }
        if let Some(away) = self.teams.get_mut(&away_id) {
            away.record_match(score_away, score_home, lineup_away);
        }

        self.results.push(ResultRecord {
            fixture_index: index,
            fixture: self.fixtures[index].clone(),
            recorded_at: Utc::now(),
        });

        info!(
            "Recorded fixture {} (pool {}): {} {}-{} {}",
            index,
            self.fixtures[index].pool,
            self.team_name(home_id),
            score_home,
            score_away,
            self.team_name(away_id)
        );

        &self.fixtures[index]
    }

    /// Apply previously accepted submissions in order, stopping at the first
    /// rejection. Returns how many were applied.
    pub fn replay<'a, I>(&mut self, submissions: I) -> Result<usize, LeagueError>
    where
        I: IntoIterator<Item = &'a ResultSubmission>,
    {
        let mut applied = 0;
        for submission in submissions {
            self.submit(submission)?;
            applied += 1;
        }
        debug!("Replayed {} results", applied);
        Ok(applied)
    }

    fn validate_lineup(&self, team_id: TeamId, lineup: &[String]) -> Result<(), LeagueError> {
        let team = self.teams.get(&team_id).ok_or_else(|| LeagueError::InvalidLineup {
            team: team_id.to_string(),
            reason: "team is not registered".to_string(),
        })?;
        let invalid = |reason: String| LeagueError::InvalidLineup {
            team: team.name().to_string(),
            reason,
        };

        if lineup.len() != self.config.lineup_size {
            return Err(invalid(format!(
                "expected {} players, got {}",
                self.config.lineup_size,
                lineup.len()
            )));
        }

        for (i, name) in lineup.iter().enumerate() {
            if !team.has_player(name) {
                return Err(invalid(format!("{} is not on the roster", name)));
            }
            if lineup[..i].contains(name) {
                return Err(invalid(format!("{} is listed twice", name)));
            }
        }

        Ok(())
    }

    fn team_name(&self, id: TeamId) -> &str {
        self.teams.get(&id).map(Team::name).unwrap_or("?")
    }

    fn pool(&self, pool: &PoolId) -> Result<&Pool, LeagueError> {
        self.pools
            .iter()
            .find(|p| &p.id == pool)
            .ok_or_else(|| LeagueError::UnknownPool(pool.clone()))
    }

    /// Teams of a pool, in pool order.
    pub fn pool_teams(&self, pool: &PoolId) -> Result<Vec<&Team>, LeagueError> {
        Ok(self
            .pool(pool)?
            .team_ids
            .iter()
            .filter_map(|id| self.teams.get(id))
            .collect())
    }

    /// Ranked standings for a pool.
    pub fn standings(&self, pool: &PoolId) -> Result<Vec<StandingsRow>, LeagueError> {
        let teams = self.pool_teams(pool)?;
        Ok(calculate::standings(&teams, &self.config))
    }

    /// Player rotation table for a pool.
    pub fn player_tracker(&self, pool: &PoolId) -> Result<Vec<TrackerRow>, LeagueError> {
        let teams = self.pool_teams(pool)?;
        Ok(calculate::player_tracker(&teams, &self.config))
    }

    /// Fixture rows with team names, optionally limited to one pool.
    pub fn fixture_rows(&self, pool: Option<&PoolId>) -> Result<Vec<FixtureRow>, LeagueError> {
        if let Some(pool) = pool {
            self.pool(pool)?;
        }

        Ok(self
            .fixtures
            .iter()
            .enumerate()
            .filter(|(_, f)| pool.map_or(true, |p| &f.pool == p))
            .map(|(index, f)| FixtureRow {
                index,
                pool: f.pool.clone(),
                round: f.round,
                home_team_id: f.home_team_id,
                home_team: self.team_name(f.home_team_id).to_string(),
                away_team_id: f.away_team_id,
                away_team: self.team_name(f.away_team_id).to_string(),
                played: f.played,
                score_home: f.score_home,
                score_away: f.score_away,
                lineup_home: f.lineup_home.clone(),
                lineup_away: f.lineup_away.clone(),
            })
            .collect())
    }

    /// Flat roster rows in registration order.
    pub fn team_rows(&self) -> Vec<TeamRow> {
        self.teams()
            .map(|t| TeamRow {
                id: t.id(),
                team: t.name().to_string(),
                pool: t.pool().clone(),
                players: t.players().iter().map(|p| p.name.clone()).collect(),
                ratings: t.players().iter().map(|p| p.rating).collect(),
                total_rating: t.total_rating(),
            })
            .collect()
    }

    /// Unplayed fixtures left in a pool.
    pub fn remaining_fixtures(&self, pool: &PoolId) -> Result<usize, LeagueError> {
        self.pool(pool)?;
        Ok(self
            .fixtures
            .iter()
            .filter(|f| &f.pool == pool && !f.played)
            .count())
    }

    /// Whether every fixture of a pool has a result.
    pub fn is_pool_complete(&self, pool: &PoolId) -> Result<bool, LeagueError> {
        Ok(self.remaining_fixtures(pool)? == 0)
    }

    /// Teams in registration order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.team_order.iter().filter_map(|id| self.teams.get(id))
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Pool labels in first-seen order.
    pub fn pool_ids(&self) -> Vec<PoolId> {
        self.pools.iter().map(|p| p.id.clone()).collect()
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn fixture(&self, index: usize) -> Option<&Fixture> {
        self.fixtures.get(index)
    }

    /// Results in submission order.
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use pretty_assertions::assert_eq;

    fn team(id: u32, name: &str, pool: &str) -> Team {
        Team::new(
            id,
            name,
            pool,
            vec![
                Player::new(format!("{name}P1"), 3.5),
                Player::new(format!("{name}P2"), 3.5),
                Player::new(format!("{name}P3"), 3.5),
            ],
        )
        .unwrap()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn pool_a() -> League {
        League::new(vec![
            team(1, "T1", "A"),
            team(2, "T2", "A"),
            team(3, "T3", "A"),
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_generates_fixtures() {
        let league = pool_a();
        let pairs: Vec<_> = league
            .fixtures()
            .iter()
            .map(|f| (f.home_team_id.get(), f.away_team_id.get()))
            .collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
        assert!(league.results().is_empty());
    }

    #[test]
    fn test_pools_keep_first_seen_order() {
        let league = League::new(vec![
            team(5, "T5", "B"),
            team(1, "T1", "A"),
            team(3, "T3", "B"),
        ])
        .unwrap();

        assert_eq!(league.pool_ids(), vec![PoolId::from("B"), PoolId::from("A")]);
        assert_eq!(
            league.pools()[0].team_ids,
            vec![TeamId::new(5), TeamId::new(3)]
        );
        let registered: Vec<_> = league.teams().map(|t| t.id().get()).collect();
        assert_eq!(registered, vec![5, 1, 3]);
    }

    #[test]
    fn test_duplicate_team_id_rejected() {
        let err = League::new(vec![team(1, "T1", "A"), team(1, "Other", "A")]).unwrap_err();
        assert_eq!(err, LeagueError::DuplicateTeamId(TeamId::new(1)));
    }

    #[test]
    fn test_enter_result_updates_both_teams() {
        let mut league = pool_a();
        league
            .enter_result(0, 21, 15, &names(&["T1P1", "T1P2"]), &names(&["T2P1", "T2P3"]))
            .unwrap();

        let t1 = league.team(TeamId::new(1)).unwrap();
        assert_eq!(t1.wins(), 1);
        assert_eq!(t1.matches_played(), 1);
        assert_eq!(t1.score_differential(), 6);
        assert_eq!(t1.player_count("T1P1"), 1);
        assert_eq!(t1.player_count("T1P2"), 1);
        assert_eq!(t1.player_count("T1P3"), 0);

        let t2 = league.team(TeamId::new(2)).unwrap();
        assert_eq!(t2.wins(), 0);
        assert_eq!(t2.matches_played(), 1);
        assert_eq!(t2.score_differential(), -6);

        let fixture = league.fixture(0).unwrap();
        assert!(fixture.played);
        assert_eq!(fixture.score_home, Some(21));
        assert_eq!(fixture.lineup_away, names(&["T2P1", "T2P3"]));
        assert_eq!(league.results().len(), 1);
        assert_eq!(league.results()[0].fixture_index, 0);
    }

    #[test]
    fn test_enter_result_twice_is_already_played() {
        let mut league = pool_a();
        let home = names(&["T1P1", "T1P2"]);
        let away = names(&["T2P1", "T2P2"]);
        league.enter_result(0, 21, 15, &home, &away).unwrap();

        let err = league.enter_result(0, 15, 21, &home, &away).unwrap_err();
        assert_eq!(err, LeagueError::AlreadyPlayed(0));

        let fixture = league.fixture(0).unwrap();
        assert_eq!(fixture.score_home, Some(21));
        assert_eq!(league.team(TeamId::new(1)).unwrap().matches_played(), 1);
        assert_eq!(league.results().len(), 1);
    }

    #[test]
    fn test_invalid_fixture_index() {
        let mut league = pool_a();
        let err = league
            .enter_result(3, 21, 15, &names(&["T1P1", "T1P2"]), &names(&["T2P1", "T2P2"]))
            .unwrap_err();
        assert_eq!(err, LeagueError::InvalidFixtureIndex { index: 3, count: 3 });
    }

    #[test]
    fn test_lineup_must_have_two_players() {
        let mut league = pool_a();
        let err = league
            .enter_result(0, 21, 15, &names(&["T1P1"]), &names(&["T2P1", "T2P2"]))
            .unwrap_err();
        assert!(matches!(err, LeagueError::InvalidLineup { .. }));
        assert!(!league.fixture(0).unwrap().played);
    }

    #[test]
    fn test_lineup_rejects_duplicates_and_strangers() {
        let mut league = pool_a();
        let dup = league
            .enter_result(0, 21, 15, &names(&["T1P1", "T1P1"]), &names(&["T2P1", "T2P2"]))
            .unwrap_err();
        assert!(matches!(dup, LeagueError::InvalidLineup { .. }));

        // Away lineup uses a home player.
        let stranger = league
            .enter_result(0, 21, 15, &names(&["T1P1", "T1P2"]), &names(&["T2P1", "T1P3"]))
            .unwrap_err();
        assert!(matches!(stranger, LeagueError::InvalidLineup { ref team, .. } if team == "T2"));

        assert_eq!(league.team(TeamId::new(1)).unwrap().matches_played(), 0);
        assert!(league.results().is_empty());
    }

    #[test]
    fn test_score_above_maximum_rejected() {
        let mut league = pool_a();
        let err = league
            .enter_result(0, 51, 15, &names(&["T1P1", "T1P2"]), &names(&["T2P1", "T2P2"]))
            .unwrap_err();
        assert_eq!(err, LeagueError::ScoreOutOfRange { score: 51, max: 50 });
        assert!(!league.fixture(0).unwrap().played);
    }

    #[test]
    fn test_results_log_in_submission_order() {
        let mut league = pool_a();
        league
            .enter_result(2, 21, 19, &names(&["T2P1", "T2P2"]), &names(&["T3P1", "T3P2"]))
            .unwrap();
        league
            .enter_result(0, 11, 21, &names(&["T1P1", "T1P2"]), &names(&["T2P2", "T2P3"]))
            .unwrap();

        let order: Vec<_> = league.results().iter().map(|r| r.fixture_index).collect();
        assert_eq!(order, vec![2, 0]);
    }

    #[test]
    fn test_standings_unknown_pool() {
        let league = pool_a();
        assert_eq!(
            league.standings(&PoolId::from("Z")).unwrap_err(),
            LeagueError::UnknownPool(PoolId::from("Z"))
        );
    }

    #[test]
    fn test_standings_after_results() {
        let mut league = pool_a();
        league
            .enter_result(0, 21, 15, &names(&["T1P1", "T1P2"]), &names(&["T2P1", "T2P2"]))
            .unwrap();
        league
            .enter_result(1, 21, 11, &names(&["T1P1", "T1P3"]), &names(&["T3P1", "T3P2"]))
            .unwrap();

        let rows = league.standings(&PoolId::from("A")).unwrap();
        assert_eq!(rows[0].team, "T1");
        assert_eq!(rows[0].points, 4);
        assert_eq!(rows[0].score_differential, 16);
        for row in &rows {
            assert_eq!(row.wins + row.losses, row.played);
            assert_eq!(row.points, 2 * row.wins);
        }
    }

    #[test]
    fn test_fixture_rows_filter_by_pool() {
        let league = League::new(vec![
            team(1, "T1", "A"),
            team(2, "T2", "A"),
            team(3, "T3", "B"),
            team(4, "T4", "B"),
        ])
        .unwrap();

        let all = league.fixture_rows(None).unwrap();
        assert_eq!(all.len(), 2);

        let b = league.fixture_rows(Some(&PoolId::from("B"))).unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].index, 1);
        assert_eq!(b[0].home_team, "T3");
        assert_eq!(b[0].away_team, "T4");

        assert!(league.fixture_rows(Some(&PoolId::from("C"))).is_err());
    }

    #[test]
    fn test_rotation_example_six_team_pool() {
        let teams = (1..=6).map(|i| team(i, &format!("T{i}"), "A")).collect();
        let mut league = League::new(teams).unwrap();
        let pool = PoolId::from("A");

        // T1 is home in all five of its fixtures.
        let t1_lineups = [
            ["T1P1", "T1P2"],
            ["T1P1", "T1P3"],
            ["T1P2", "T1P1"],
            ["T1P2", "T1P3"],
            ["T1P3", "T1P1"],
        ];
        let t1_fixtures: Vec<usize> = league
            .fixtures()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.home_team_id == TeamId::new(1))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(t1_fixtures.len(), 5);

        for (index, lineup) in t1_fixtures.iter().zip(t1_lineups.iter()) {
            let away = league.fixture(*index).unwrap().away_team_id.get();
            let away_lineup = vec![format!("T{away}P1"), format!("T{away}P2")];
            league
                .enter_result(*index, 21, 10, &names(lineup), &away_lineup)
                .unwrap();
        }

        let rows = league.player_tracker(&pool).unwrap();
        let t1: Vec<_> = rows
            .iter()
            .filter(|r| r.team == "T1")
            .map(|r| (r.played, r.remaining_min, r.remaining_max))
            .collect();
        assert_eq!(t1, vec![(4, 0, 0), (3, 0, 1), (3, 0, 1)]);
        assert_eq!(league.remaining_fixtures(&pool).unwrap(), 10);
        assert!(!league.is_pool_complete(&pool).unwrap());
    }

    #[test]
    fn test_replay_reproduces_state() {
        let submissions = vec![
            ResultSubmission::new(0, 21, 15, &["T1P1", "T1P2"], &["T2P1", "T2P2"]),
            ResultSubmission::new(2, 9, 21, &["T2P1", "T2P3"], &["T3P2", "T3P3"]),
        ];

        let mut first = pool_a();
        first.replay(&submissions).unwrap();
        let mut second = pool_a();
        second.replay(&submissions).unwrap();

        let pool = PoolId::from("A");
        assert_eq!(first.standings(&pool).unwrap(), second.standings(&pool).unwrap());
        assert_eq!(
            first.player_tracker(&pool).unwrap(),
            second.player_tracker(&pool).unwrap()
        );
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        let submissions = vec![
            ResultSubmission::new(0, 21, 15, &["T1P1", "T1P2"], &["T2P1", "T2P2"]),
            ResultSubmission::new(0, 21, 15, &["T1P1", "T1P2"], &["T2P1", "T2P2"]),
        ];
        let mut league = pool_a();
        assert_eq!(
            league.replay(&submissions).unwrap_err(),
            LeagueError::AlreadyPlayed(0)
        );
        assert_eq!(league.results().len(), 1);
    }

    #[test]
    fn test_team_rows() {
        let league = pool_a();
        let rows = league.team_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].players, names(&["T1P1", "T1P2", "T1P3"]));
        assert!((rows[0].total_rating - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_check_result_does_not_record() {
        let league = pool_a();
        let ok = ResultSubmission::new(0, 21, 15, &["T1P1", "T1P2"], &["T2P1", "T2P2"]);
        assert_eq!(league.check_result(&ok), Ok(()));

        let bad = ResultSubmission::new(0, 21, 15, &["T1P1"], &["T2P1", "T2P2"]);
        assert!(matches!(
            league.check_result(&bad),
            Err(LeagueError::InvalidLineup { .. })
        ));

        assert!(!league.fixtures()[0].played);
        assert!(league.results().is_empty());
    }

    #[test]
    fn test_pin_result_stamps_fixture_teams() {
        let league = pool_a();
        let pinned = league
            .pin_result(ResultSubmission::new(
                2,
                21,
                15,
                &["T2P1", "T2P2"],
                &["T3P1", "T3P2"],
            ))
            .unwrap();

        assert_eq!(pinned.home_team_id, Some(TeamId::new(2)));
        assert_eq!(pinned.away_team_id, Some(TeamId::new(3)));
    }

    #[test]
    fn test_submission_for_other_pairing_rejected() {
        let mut league = pool_a();
        // Same roster names on both sides would pass the lineup check.
        let submission = ResultSubmission::new(0, 21, 15, &["T1P1", "T1P2"], &["T2P1", "T2P2"])
            .with_teams(TeamId::new(1), TeamId::new(3));

        let err = league.submit(&submission).unwrap_err();
        assert_eq!(
            err,
            LeagueError::FixtureMismatch {
                index: 0,
                expected_home: TeamId::new(1),
                expected_away: TeamId::new(2),
                home: TeamId::new(1),
                away: TeamId::new(3),
            }
        );
        assert!(!league.fixtures()[0].played);
        assert_eq!(league.team(TeamId::new(1)).unwrap().matches_played(), 0);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = LeagueConfig {
            lineup_size: 0,
            ..LeagueConfig::default()
        };
        let err = League::with_config(vec![team(1, "T1", "A"), team(2, "T2", "A")], config)
            .unwrap_err();
        assert!(matches!(err, LeagueError::InvalidConfig(_)));
    }
}
