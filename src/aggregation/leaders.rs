//! Player and team views computed from boxscores
//!
//! Every function here runs over a `LeagueData` snapshot and recomputes its
//! result from scratch. Averages are rounded to one decimal place on output
//! only; ranking uses the unrounded values with ties going to the lower
//! player id.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::pipeline::{group_by, reduce, sort_truncate};
use crate::error::{StatsError, StatsResult};
use crate::league::LeagueData;
use crate::types::{
    BoxScore, BoxScoreLine, LeaderboardEntry, Player, PlayerSeasonStats, StatAverages, StatField,
    StatTotals, TeamStats, TopScorer,
};
use crate::utils::{percentage, round_one_decimal};

/// Limit used when a caller does not pass one
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

/// Largest accepted limit for ranked views
pub const MAX_LEADERBOARD_LIMIT: i64 = 50;

/// Boxscore count above which the season filter runs in parallel
const PARALLEL_FILTER_THRESHOLD: usize = 10_000;

struct PlayerAverage<'a> {
    player: &'a Player,
    average: f64,
    games_played: usize,
}

fn checked_limit(limit: i64) -> StatsResult<usize> {
    if limit <= 0 {
        return Err(StatsError::invalid_argument(format!(
            "limit must be a positive integer, got {}",
            limit
        )));
    }
    if limit > MAX_LEADERBOARD_LIMIT {
        return Err(StatsError::invalid_argument(format!(
            "limit must be at most {}, got {}",
            MAX_LEADERBOARD_LIMIT, limit
        )));
    }
    // Bounded by MAX_LEADERBOARD_LIMIT above.
    Ok(limit as usize)
}

/// Boxscores of games in `season`, or all of them without a filter
fn season_rows<'a>(data: &'a LeagueData, season: Option<&str>) -> Vec<&'a BoxScore> {
    let Some(season) = season else {
        return data.box_scores.iter().collect();
    };

    let game_ids: HashSet<i64> = data
        .games
        .iter()
        .filter(|g| g.season == season)
        .map(|g| g.id)
        .collect();

    if data.box_scores.len() > PARALLEL_FILTER_THRESHOLD {
        data.box_scores
            .par_iter()
            .filter(|s| game_ids.contains(&s.game_id))
            .collect()
    } else {
        data.box_scores
            .iter()
            .filter(|s| game_ids.contains(&s.game_id))
            .collect()
    }
}

fn players_by_id(data: &LeagueData) -> HashMap<i64, &Player> {
    data.players.iter().map(|p| (p.id, p)).collect()
}

/// Rank players by their per-game average of `stat`
fn rank_players<'a>(
    data: &'a LeagueData,
    stat: StatField,
    limit: i64,
    season: Option<&str>,
) -> StatsResult<Vec<PlayerAverage<'a>>> {
    let limit = checked_limit(limit)?;
    let players = players_by_id(data);

    let groups = group_by(season_rows(data, season), |s| s.player_id);
    let averages = reduce(groups, |group| {
        let player = *players.get(&group.key)?;
        let games_played = group.rows.len();
        if games_played == 0 {
            return None;
        }
        let total: f64 = group.rows.iter().map(|s| stat.value(s)).sum();
        Some(PlayerAverage {
            player,
            average: total / games_played as f64,
            games_played,
        })
    });

    Ok(sort_truncate(
        averages,
        |a, b| {
            b.average
                .total_cmp(&a.average)
                .then(a.player.id.cmp(&b.player.id))
        },
        Some(limit),
    ))
}

/// Best scorers by average points per game
pub fn top_scorers(
    data: &LeagueData,
    limit: i64,
    season: Option<&str>,
) -> StatsResult<Vec<TopScorer>> {
    let ranked = rank_players(data, StatField::Points, limit, season)?;
    Ok(ranked
        .into_iter()
        .map(|r| TopScorer {
            player_id: r.player.id,
            name: r.player.name.clone(),
            team: r.player.team.clone(),
            avg_points: round_one_decimal(r.average),
            games_played: r.games_played,
        })
        .collect())
}

/// Leaders for any numeric boxscore column
pub fn leaderboard(
    data: &LeagueData,
    stat: StatField,
    limit: i64,
    season: Option<&str>,
) -> StatsResult<Vec<LeaderboardEntry>> {
    let ranked = rank_players(data, stat, limit, season)?;
    Ok(ranked
        .into_iter()
        .map(|r| LeaderboardEntry {
            player_id: r.player.id,
            name: r.player.name.clone(),
            team: r.player.team.clone(),
            stat,
            average: round_one_decimal(r.average),
            games_played: r.games_played,
        })
        .collect())
}

/// Averages over every boxscore of the team's current players
///
/// Fails with `NotFound` when no boxscore matches the team and season.
pub fn team_stats(data: &LeagueData, team: &str, season: Option<&str>) -> StatsResult<TeamStats> {
    let players = players_by_id(data);
    let rows = season_rows(data, season).into_iter().filter(|s| {
        players
            .get(&s.player_id)
            .map(|p| p.team == team)
            .unwrap_or(false)
    });

    let groups = group_by(rows, |_| team);
    let stats = reduce(groups, |group| {
        let total_games = group.rows.len();
        if total_games == 0 {
            return None;
        }
        let mean = |field: StatField| {
            let sum: f64 = group.rows.iter().map(|s| field.value(s)).sum();
            round_one_decimal(sum / total_games as f64)
        };
        Some(TeamStats {
            team: team.to_string(),
            season: season.unwrap_or("all").to_string(),
            avg_points: mean(StatField::Points),
            avg_assists: mean(StatField::Assists),
            avg_rebounds: mean(StatField::Rebounds),
            total_games,
        })
    });

    stats
        .into_iter()
        .next()
        .ok_or_else(|| StatsError::not_found(format!("No data found for team '{}'", team)))
}

/// Totals, per-game averages and shooting percentages for one player
pub fn player_season_stats(
    data: &LeagueData,
    player_id: i64,
    season: Option<&str>,
) -> StatsResult<PlayerSeasonStats> {
    if !data.players.iter().any(|p| p.id == player_id) {
        return Err(StatsError::not_found(format!("Player {} not found", player_id)));
    }

    let rows: Vec<&BoxScore> = season_rows(data, season)
        .into_iter()
        .filter(|s| s.player_id == player_id)
        .collect();
    if rows.is_empty() {
        return Ok(PlayerSeasonStats::empty());
    }

    let totals = rows.iter().fold(StatTotals::default(), |mut t, s| {
        t.points += u64::from(s.points);
        t.assists += u64::from(s.assists);
        t.rebounds += u64::from(s.rebounds);
        t.steals += u64::from(s.steals);
        t.blocks += u64::from(s.blocks);
        t.turnovers += u64::from(s.turnovers);
        t.field_goals_made += u64::from(s.field_goals_made);
        t.field_goals_attempted += u64::from(s.field_goals_attempted);
        t.three_pointers_made += u64::from(s.three_pointers_made);
        t.three_pointers_attempted += u64::from(s.three_pointers_attempted);
        t.minutes_played += s.minutes_played;
        t
    });

    let games = rows.len() as f64;
    let per_game = |total: u64| round_one_decimal(total as f64 / games);
    let averages = StatAverages {
        points: per_game(totals.points),
        assists: per_game(totals.assists),
        rebounds: per_game(totals.rebounds),
        steals: per_game(totals.steals),
        blocks: per_game(totals.blocks),
        turnovers: per_game(totals.turnovers),
        field_goal_pct: round_one_decimal(percentage(
            totals.field_goals_made,
            totals.field_goals_attempted,
        )),
        three_point_pct: round_one_decimal(percentage(
            totals.three_pointers_made,
            totals.three_pointers_attempted,
        )),
        minutes: round_one_decimal(totals.minutes_played / games),
    };

    Ok(PlayerSeasonStats {
        total_games: rows.len(),
        totals: Some(totals),
        averages: Some(averages),
    })
}

/// Boxscore lines recorded for one game, in the order they were added
pub fn game_box_score(data: &LeagueData, game_id: i64) -> StatsResult<Vec<BoxScoreLine>> {
    if !data.games.iter().any(|g| g.id == game_id) {
        return Err(StatsError::not_found(format!("Game {} not found", game_id)));
    }

    let players = players_by_id(data);
    Ok(data
        .box_scores
        .iter()
        .filter(|s| s.game_id == game_id)
        .filter_map(|s| {
            players
                .get(&s.player_id)
                .map(|p| BoxScoreLine::new(s, &p.name))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoxScoreCreate, Game, GameCreate};
    use chrono::NaiveDate;

    fn player(id: i64, name: &str, team: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            team: team.to_string(),
            position: "G".to_string(),
            height: 76.0,
            weight: 200.0,
            jersey_number: id as u32,
            birth_date: NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
        }
    }

    fn game(id: i64, season: &str) -> Game {
        Game::from_create(
            id,
            GameCreate {
                home_team: "Home".to_string(),
                away_team: "Away".to_string(),
                game_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                season: season.to_string(),
            },
        )
    }

    fn line(id: i64, player_id: i64, game_id: i64, points: u32, assists: u32) -> BoxScore {
        BoxScore::from_create(
            id,
            game_id,
            BoxScoreCreate {
                player_id,
                points,
                assists,
                rebounds: 5,
                field_goals_made: 4,
                field_goals_attempted: 10,
                ..Default::default()
            },
        )
    }

    fn fixture() -> LeagueData {
        LeagueData {
            players: vec![
                player(1, "Ada", "Lakers"),
                player(2, "Bo", "Lakers"),
                player(3, "Cy", "Celtics"),
                player(4, "Di", "Celtics"),
            ],
            games: vec![game(10, "2022-2023"), game(11, "2023-2024"), game(12, "2023-2024")],
            box_scores: vec![
                line(1, 1, 10, 30, 2),
                line(2, 1, 11, 20, 4),
                line(3, 2, 11, 15, 9),
                line(4, 2, 12, 17, 11),
                line(5, 3, 12, 40, 1),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_top_scorers_all_seasons() {
        let data = fixture();
        let scorers = top_scorers(&data, 5, None).unwrap();

        let summary: Vec<(i64, f64, usize)> = scorers
            .iter()
            .map(|s| (s.player_id, s.avg_points, s.games_played))
            .collect();
        // Player 4 has no boxscores and is left out.
        assert_eq!(summary, vec![(3, 40.0, 1), (1, 25.0, 2), (2, 16.0, 2)]);
    }

    #[test]
    fn test_top_scorers_season_filter() {
        let data = fixture();
        let scorers = top_scorers(&data, 5, Some("2023-2024")).unwrap();

        let ada = scorers.iter().find(|s| s.player_id == 1).unwrap();
        assert_eq!(ada.avg_points, 20.0);
        assert_eq!(ada.games_played, 1);
    }

    #[test]
    fn test_top_scorers_truncates() {
        let scorers = top_scorers(&fixture(), 2, None).unwrap();
        assert_eq!(scorers.len(), 2);
        assert_eq!(scorers[0].player_id, 3);
    }

    #[test]
    fn test_limit_bounds() {
        let data = fixture();
        for limit in [0, -1, MAX_LEADERBOARD_LIMIT + 1] {
            let err = top_scorers(&data, limit, None).unwrap_err();
            assert!(matches!(err, StatsError::InvalidArgument(_)), "limit {}", limit);
        }
        assert!(top_scorers(&data, MAX_LEADERBOARD_LIMIT, None).is_ok());
    }

    #[test]
    fn test_ties_go_to_lower_player_id() {
        let mut data = fixture();
        data.box_scores = vec![line(1, 2, 11, 10, 0), line(2, 1, 11, 10, 0)];
        let scorers = top_scorers(&data, 5, None).unwrap();
        assert_eq!(scorers[0].player_id, 1);
        assert_eq!(scorers[1].player_id, 2);
    }

    #[test]
    fn test_leaderboard_assists() {
        let board = leaderboard(&fixture(), StatField::Assists, 3, None).unwrap();
        let order: Vec<(i64, f64)> = board.iter().map(|e| (e.player_id, e.average)).collect();
        assert_eq!(order, vec![(2, 10.0), (1, 3.0), (3, 1.0)]);
        assert!(board.iter().all(|e| e.stat == StatField::Assists));
    }

    #[test]
    fn test_team_stats() {
        let stats = team_stats(&fixture(), "Lakers", Some("2023-2024")).unwrap();
        assert_eq!(stats.total_games, 3);
        // (20 + 15 + 17) / 3
        assert_eq!(stats.avg_points, 17.3);
        assert_eq!(stats.avg_assists, 8.0);
        assert_eq!(stats.avg_rebounds, 5.0);
        assert_eq!(stats.season, "2023-2024");

        let all = team_stats(&fixture(), "Celtics", None).unwrap();
        assert_eq!(all.season, "all");
        assert_eq!(all.total_games, 1);
    }

    #[test]
    fn test_team_stats_not_found() {
        let err = team_stats(&fixture(), "Knicks", None).unwrap_err();
        assert!(matches!(err, StatsError::NotFound(_)));

        let err = team_stats(&fixture(), "Celtics", Some("2022-2023")).unwrap_err();
        assert!(matches!(err, StatsError::NotFound(_)));
    }

    #[test]
    fn test_player_season_stats() {
        let stats = player_season_stats(&fixture(), 1, None).unwrap();
        assert_eq!(stats.total_games, 2);

        let totals = stats.totals.unwrap();
        assert_eq!(totals.points, 50);
        assert_eq!(totals.field_goals_attempted, 20);

        let averages = stats.averages.unwrap();
        assert_eq!(averages.points, 25.0);
        assert_eq!(averages.field_goal_pct, 40.0);
        assert_eq!(averages.three_point_pct, 0.0);
    }

    #[test]
    fn test_player_season_stats_without_games() {
        let stats = player_season_stats(&fixture(), 4, None).unwrap();
        assert_eq!(stats, PlayerSeasonStats::empty());

        let err = player_season_stats(&fixture(), 99, None).unwrap_err();
        assert!(matches!(err, StatsError::NotFound(_)));
    }

    #[test]
    fn test_game_box_score() {
        let lines = game_box_score(&fixture(), 12).unwrap();
        let names: Vec<&str> = lines.iter().map(|l| l.player_name.as_str()).collect();
        assert_eq!(names, vec!["Bo", "Cy"]);
        assert_eq!(lines[0].field_goals, "4/10");

        assert!(game_box_score(&fixture(), 99).is_err());
    }
}
