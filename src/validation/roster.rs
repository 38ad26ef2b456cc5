//! Player, game and boxscore checks

use crate::error::{StatsError, StatsResult};
use crate::types::{BoxScoreCreate, GameCreate, PlayerCreate, PlayerUpdate};

fn require_text(problems: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        problems.push(format!("'{}' must not be blank", field));
    }
}

fn require_positive(problems: &mut Vec<String>, field: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        problems.push(format!("'{}' must be a positive number", field));
    }
}

fn finish(problems: Vec<String>) -> StatsResult<()> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(StatsError::validation(problems.join("; ")))
    }
}

pub fn validate_player(player: &PlayerCreate) -> StatsResult<()> {
    let mut problems = Vec::new();
    require_text(&mut problems, "name", &player.name);
    require_text(&mut problems, "team", &player.team);
    require_text(&mut problems, "position", &player.position);
    require_positive(&mut problems, "height", player.height);
    require_positive(&mut problems, "weight", player.weight);
    finish(problems)
}

pub fn validate_player_update(update: &PlayerUpdate) -> StatsResult<()> {
    let mut problems = Vec::new();
    if let Some(name) = &update.name {
        require_text(&mut problems, "name", name);
    }
    if let Some(team) = &update.team {
        require_text(&mut problems, "team", team);
    }
    if let Some(position) = &update.position {
        require_text(&mut problems, "position", position);
    }
    if let Some(height) = update.height {
        require_positive(&mut problems, "height", height);
    }
    if let Some(weight) = update.weight {
        require_positive(&mut problems, "weight", weight);
    }
    finish(problems)
}

pub fn validate_game(game: &GameCreate) -> StatsResult<()> {
    let mut problems = Vec::new();
    require_text(&mut problems, "home_team", &game.home_team);
    require_text(&mut problems, "away_team", &game.away_team);
    require_text(&mut problems, "season", &game.season);
    if game.home_team == game.away_team {
        problems.push("a team cannot play itself".to_string());
    }
    finish(problems)
}

/// Made shots can never exceed attempts
pub fn validate_box_score(stats: &BoxScoreCreate) -> StatsResult<()> {
    let mut problems = Vec::new();
    let pairs = [
        ("field_goals", stats.field_goals_made, stats.field_goals_attempted),
        ("three_pointers", stats.three_pointers_made, stats.three_pointers_attempted),
        ("free_throws", stats.free_throws_made, stats.free_throws_attempted),
    ];
    for (name, made, attempted) in pairs {
        if made > attempted {
            problems.push(format!(
                "'{}_made' ({}) exceeds '{}_attempted' ({})",
                name, made, name, attempted
            ));
        }
    }
    if stats.three_pointers_made > stats.field_goals_made {
        problems.push("'three_pointers_made' exceeds 'field_goals_made'".to_string());
    }
    if !(stats.minutes_played.is_finite() && stats.minutes_played >= 0.0) {
        problems.push("'minutes_played' must be zero or more".to_string());
    }
    finish(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn player() -> PlayerCreate {
        PlayerCreate {
            name: "Jayson Tatum".to_string(),
            team: "Celtics".to_string(),
            position: "SF".to_string(),
            height: 80.0,
            weight: 210.0,
            jersey_number: 0,
            birth_date: NaiveDate::from_ymd_opt(1998, 3, 3).unwrap(),
        }
    }

    #[test]
    fn test_valid_player() {
        assert!(validate_player(&player()).is_ok());
    }

    #[test]
    fn test_player_blank_name_and_bad_height() {
        let mut p = player();
        p.name = " ".to_string();
        p.height = 0.0;
        let message = validate_player(&p).unwrap_err().to_string();
        assert!(message.contains("'name'"));
        assert!(message.contains("'height'"));
    }

    #[test]
    fn test_player_update_only_checks_present_fields() {
        assert!(validate_player_update(&PlayerUpdate::default()).is_ok());
        let update = PlayerUpdate {
            weight: Some(-3.0),
            ..Default::default()
        };
        assert!(validate_player_update(&update).is_err());
    }

    #[test]
    fn test_game_against_itself() {
        let game = GameCreate {
            home_team: "Bucks".to_string(),
            away_team: "Bucks".to_string(),
            game_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            season: "2023-2024".to_string(),
        };
        assert!(validate_game(&game).is_err());
    }

    #[test]
    fn test_box_score_made_over_attempted() {
        let stats = BoxScoreCreate {
            player_id: 1,
            free_throws_made: 5,
            free_throws_attempted: 4,
            ..Default::default()
        };
        let message = validate_box_score(&stats).unwrap_err().to_string();
        assert!(message.contains("free_throws_made"));
    }

    #[test]
    fn test_box_score_valid_line() {
        let stats = BoxScoreCreate {
            player_id: 1,
            points: 24,
            field_goals_made: 9,
            field_goals_attempted: 17,
            three_pointers_made: 2,
            three_pointers_attempted: 6,
            free_throws_made: 4,
            free_throws_attempted: 4,
            minutes_played: 34.0,
            ..Default::default()
        };
        assert!(validate_box_score(&stats).is_ok());
    }
}
