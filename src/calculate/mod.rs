//! Standings and player rotation calculations.
//!
//! Both tables are derived from team counters, never replayed from the
//! results log.

use crate::config::LeagueConfig;
use crate::models::{StandingsRow, Team, TrackerRow};

/// Points awarded for `wins`, saturating at `u32::MAX`.
pub fn calculate_points(wins: u32, points_per_win: u32) -> u32 {
    wins.saturating_mul(points_per_win)
}

/// Appearances remaining before `played` reaches `target`, floored at zero.
pub fn remaining_to(target: u32, played: u32) -> u32 {
    target.saturating_sub(played)
}

/// Build a ranked standings table for the given teams (in pool order).
///
/// Rows are ordered by points then score differential, both descending;
/// teams equal on both keep pool order. The rank is a dense rank over the
/// same (points, differential) key, so teams only share a rank when they
/// are tied on both.
pub fn standings(teams: &[&Team], config: &LeagueConfig) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| StandingsRow {
            rank: 0,
            team_id: team.id(),
            team: team.name().to_string(),
            played: team.matches_played(),
            wins: team.wins(),
            losses: team.losses(),
            points: calculate_points(team.wins(), config.points_per_win),
            score_differential: team.score_differential(),
        })
        .collect();

    // Stable sort keeps pool order for full ties.
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.score_differential.cmp(&a.score_differential))
    });

    let mut rank = 0;
    let mut previous: Option<(u32, i64)> = None;
    for row in &mut rows {
        let key = (row.points, row.score_differential);
        if previous != Some(key) {
            rank += 1;
            previous = Some(key);
        }
        row.rank = rank;
    }

    rows
}

/// Build the player rotation table: one row per rostered player.
pub fn player_tracker(teams: &[&Team], config: &LeagueConfig) -> Vec<TrackerRow> {
    teams
        .iter()
        .flat_map(|team| {
            team.players().iter().map(move |player| {
                let played = team.player_count(&player.name);
                TrackerRow {
                    team_id: team.id(),
                    team: team.name().to_string(),
                    player: player.name.clone(),
                    played,
                    remaining_min: remaining_to(config.rotation_min, played),
                    remaining_max: remaining_to(config.rotation_max, played),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use pretty_assertions::assert_eq;

    fn team(id: u32, name: &str) -> Team {
        Team::new(
            id,
            name,
            "A",
            vec![
                Player::new(format!("{name}-1"), 3.0),
                Player::new(format!("{name}-2"), 3.0),
                Player::new(format!("{name}-3"), 3.0),
            ],
        )
        .unwrap()
    }

    fn lineup(team: &Team, picks: [usize; 2]) -> Vec<String> {
        picks
            .iter()
            .map(|&i| team.players()[i].name.clone())
            .collect()
    }

    #[test]
    fn test_calculate_points() {
        assert_eq!(calculate_points(3, 2), 6);
        assert_eq!(calculate_points(0, 2), 0);
        assert_eq!(calculate_points(u32::MAX, 2), u32::MAX);
    }

    #[test]
    fn test_remaining_to() {
        assert_eq!(remaining_to(3, 1), 2);
        assert_eq!(remaining_to(3, 5), 0);
    }

    #[test]
    fn test_standings_sorted_by_points_then_differential() {
        let mut a = team(1, "A");
        let mut b = team(2, "B");
        let mut c = team(3, "C");

        // B and C on 2 points, C with the better differential.
        a.record_match(10, 21, &lineup(&a, [0, 1]));
        b.record_match(21, 18, &lineup(&b, [0, 1]));
        c.record_match(21, 11, &lineup(&c, [0, 1]));

        let rows = standings(&[&a, &b, &c], &LeagueConfig::default());
        let names: Vec<_> = rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
        assert_eq!(rows[0].score_differential, 10);
        assert_eq!(rows[1].score_differential, 3);
    }

    #[test]
    fn test_equal_points_different_differential_get_distinct_ranks() {
        let mut a = team(1, "A");
        let mut b = team(2, "B");
        a.record_match(21, 18, &lineup(&a, [0, 1]));
        b.record_match(21, 11, &lineup(&b, [0, 1]));

        let rows = standings(&[&a, &b], &LeagueConfig::default());
        assert_eq!(rows[0].team, "B");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].team, "A");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_full_ties_share_rank_and_keep_pool_order() {
        let a = team(1, "A");
        let b = team(2, "B");
        let mut c = team(3, "C");
        c.record_match(21, 5, &lineup(&c, [0, 2]));

        let rows = standings(&[&a, &b, &c], &LeagueConfig::default());
        let ranked: Vec<_> = rows.iter().map(|r| (r.team.as_str(), r.rank)).collect();
        assert_eq!(ranked, vec![("C", 1), ("A", 2), ("B", 2)]);
    }

    #[test]
    fn test_wins_losses_points_consistency() {
        let mut a = team(1, "A");
        a.record_match(21, 10, &lineup(&a, [0, 1]));
        a.record_match(8, 21, &lineup(&a, [1, 2]));
        a.record_match(15, 15, &lineup(&a, [0, 2]));

        let rows = standings(&[&a], &LeagueConfig::default());
        let row = &rows[0];
        assert_eq!(row.wins + row.losses, row.played);
        assert_eq!(row.points, 2 * row.wins);
        assert_eq!(row.played, 3);
        assert_eq!(row.wins, 1);
    }

    #[test]
    fn test_tracker_remainders() {
        let mut a = team(1, "A");
        // Same pair fielded twice; the third player sits both out.
        a.record_match(21, 10, &lineup(&a, [0, 1]));
        a.record_match(21, 10, &lineup(&a, [0, 1]));

        let rows = player_tracker(&[&a], &LeagueConfig::default());
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.player.as_str(), r.played, r.remaining_min, r.remaining_max))
            .collect();
        assert_eq!(
            summary,
            vec![("A-1", 2, 1, 2), ("A-2", 2, 1, 2), ("A-3", 0, 3, 4)]
        );
    }

    #[test]
    fn test_tracker_two_two_one_counts() {
        let mut a = team(1, "A");
        // Counts 2, 2, 1 for the three players.
        a.record_match(21, 10, &lineup(&a, [0, 1]));
        a.record_match(21, 10, &lineup(&a, [1, 2]));
        a.record_match(21, 10, &["A-1".to_string()]);

        let rows = player_tracker(&[&a], &LeagueConfig::default());
        let min: Vec<_> = rows.iter().map(|r| r.remaining_min).collect();
        let max: Vec<_> = rows.iter().map(|r| r.remaining_max).collect();
        assert_eq!(min, vec![1, 1, 2]);
        assert_eq!(max, vec![2, 2, 3]);
    }

    #[test]
    fn test_tracker_floors_at_zero() {
        let mut a = team(1, "A");
        for _ in 0..5 {
            a.record_match(21, 10, &lineup(&a, [0, 1]));
        }
        let rows = player_tracker(&[&a], &LeagueConfig::default());
        assert_eq!(rows[0].played, 5);
        assert_eq!(rows[0].remaining_min, 0);
        assert_eq!(rows[0].remaining_max, 0);
    }
}
