//! Game schedule types

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Scheduled => write!(f, "scheduled"),
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A scheduled or played game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub game_date: NaiveDate,
    /// Season label, e.g. "2023-2024"
    pub season: String,
    pub status: GameStatus,
}

/// Payload for scheduling a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCreate {
    pub home_team: String,
    pub away_team: String,
    pub game_date: NaiveDate,
    pub season: String,
}

/// Score and status update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameUpdate {
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: Option<GameStatus>,
}

impl Game {
    pub(crate) fn from_create(id: i64, create: GameCreate) -> Self {
        Self {
            id,
            home_team: create.home_team,
            away_team: create.away_team,
            home_score: 0,
            away_score: 0,
            game_date: create.game_date,
            season: create.season,
            status: GameStatus::Scheduled,
        }
    }

    pub(crate) fn apply(&mut self, update: GameUpdate) {
        if let Some(score) = update.home_score {
            self.home_score = score;
        }
        if let Some(score) = update.away_score {
            self.away_score = score;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// True when `team` plays in this game, home or away
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_wire_name() {
        for status in [GameStatus::Scheduled, GameStatus::InProgress, GameStatus::Completed] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, serde_json::Value::String(status.to_string()));
        }
        assert!(serde_json::from_str::<GameStatus>("\"postponed\"").is_err());
    }

    #[test]
    fn test_new_game_defaults() {
        let game = Game::from_create(
            4,
            GameCreate {
                home_team: "Lakers".to_string(),
                away_team: "Warriors".to_string(),
                game_date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
                season: "2023-2024".to_string(),
            },
        );

        assert_eq!(game.status, GameStatus::Scheduled);
        assert_eq!((game.home_score, game.away_score), (0, 0));
        assert!(game.involves("Warriors"));
        assert!(!game.involves("Celtics"));
    }
}
