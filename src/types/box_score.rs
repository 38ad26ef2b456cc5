//! Per-game boxscore records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One player's numbers for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    pub id: i64,
    pub player_id: i64,
    pub game_id: i64,
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub minutes_played: f64,
}

/// Payload for recording a boxscore
///
/// `game_id` may be omitted; the game in the request path always wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxScoreCreate {
    pub player_id: i64,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub rebounds: u32,
    #[serde(default)]
    pub steals: u32,
    #[serde(default)]
    pub blocks: u32,
    #[serde(default)]
    pub turnovers: u32,
    #[serde(default)]
    pub fouls: u32,
    #[serde(default)]
    pub field_goals_made: u32,
    #[serde(default)]
    pub field_goals_attempted: u32,
    #[serde(default)]
    pub three_pointers_made: u32,
    #[serde(default)]
    pub three_pointers_attempted: u32,
    #[serde(default)]
    pub free_throws_made: u32,
    #[serde(default)]
    pub free_throws_attempted: u32,
    #[serde(default)]
    pub minutes_played: f64,
}

impl BoxScore {
    pub(crate) fn from_create(id: i64, game_id: i64, create: BoxScoreCreate) -> Self {
        Self {
            id,
            player_id: create.player_id,
            game_id,
            points: create.points,
            assists: create.assists,
            rebounds: create.rebounds,
            steals: create.steals,
            blocks: create.blocks,
            turnovers: create.turnovers,
            fouls: create.fouls,
            field_goals_made: create.field_goals_made,
            field_goals_attempted: create.field_goals_attempted,
            three_pointers_made: create.three_pointers_made,
            three_pointers_attempted: create.three_pointers_attempted,
            free_throws_made: create.free_throws_made,
            free_throws_attempted: create.free_throws_attempted,
            minutes_played: create.minutes_played,
        }
    }
}

/// A numeric boxscore column that can be ranked or averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    #[default]
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
    Turnovers,
    Fouls,
    FieldGoalsMade,
    FieldGoalsAttempted,
    ThreePointersMade,
    ThreePointersAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    MinutesPlayed,
}

impl StatField {
    pub const ALL: [StatField; 14] = [
        StatField::Points,
        StatField::Assists,
        StatField::Rebounds,
        StatField::Steals,
        StatField::Blocks,
        StatField::Turnovers,
        StatField::Fouls,
        StatField::FieldGoalsMade,
        StatField::FieldGoalsAttempted,
        StatField::ThreePointersMade,
        StatField::ThreePointersAttempted,
        StatField::FreeThrowsMade,
        StatField::FreeThrowsAttempted,
        StatField::MinutesPlayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::Points => "points",
            StatField::Assists => "assists",
            StatField::Rebounds => "rebounds",
            StatField::Steals => "steals",
            StatField::Blocks => "blocks",
            StatField::Turnovers => "turnovers",
            StatField::Fouls => "fouls",
            StatField::FieldGoalsMade => "field_goals_made",
            StatField::FieldGoalsAttempted => "field_goals_attempted",
            StatField::ThreePointersMade => "three_pointers_made",
            StatField::ThreePointersAttempted => "three_pointers_attempted",
            StatField::FreeThrowsMade => "free_throws_made",
            StatField::FreeThrowsAttempted => "free_throws_attempted",
            StatField::MinutesPlayed => "minutes_played",
        }
    }

    /// Read this column from a boxscore
    pub fn value(&self, score: &BoxScore) -> f64 {
        match self {
            StatField::Points => f64::from(score.points),
            StatField::Assists => f64::from(score.assists),
            StatField::Rebounds => f64::from(score.rebounds),
            StatField::Steals => f64::from(score.steals),
            StatField::Blocks => f64::from(score.blocks),
            StatField::Turnovers => f64::from(score.turnovers),
            StatField::Fouls => f64::from(score.fouls),
            StatField::FieldGoalsMade => f64::from(score.field_goals_made),
            StatField::FieldGoalsAttempted => f64::from(score.field_goals_attempted),
            StatField::ThreePointersMade => f64::from(score.three_pointers_made),
            StatField::ThreePointersAttempted => f64::from(score.three_pointers_attempted),
            StatField::FreeThrowsMade => f64::from(score.free_throws_made),
            StatField::FreeThrowsAttempted => f64::from(score.free_throws_attempted),
            StatField::MinutesPlayed => score.minutes_played,
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown stat '{}'", s))
    }
}

/// A boxscore row as displayed for a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScoreLine {
    pub player_id: i64,
    pub player_name: String,
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    /// "made/attempted"
    pub field_goals: String,
    pub three_pointers: String,
    pub free_throws: String,
    pub minutes: f64,
}

impl BoxScoreLine {
    pub fn new(score: &BoxScore, player_name: &str) -> Self {
        Self {
            player_id: score.player_id,
            player_name: player_name.to_string(),
            points: score.points,
            assists: score.assists,
            rebounds: score.rebounds,
            steals: score.steals,
            blocks: score.blocks,
            turnovers: score.turnovers,
            field_goals: format!("{}/{}", score.field_goals_made, score.field_goals_attempted),
            three_pointers: format!(
                "{}/{}",
                score.three_pointers_made, score.three_pointers_attempted
            ),
            free_throws: format!("{}/{}", score.free_throws_made, score.free_throws_attempted),
            minutes: score.minutes_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoxScore {
        BoxScore::from_create(
            1,
            9,
            BoxScoreCreate {
                player_id: 30,
                points: 31,
                assists: 7,
                field_goals_made: 11,
                field_goals_attempted: 20,
                three_pointers_made: 6,
                three_pointers_attempted: 12,
                free_throws_made: 3,
                free_throws_attempted: 3,
                minutes_played: 36.5,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_stat_field_parse() {
        assert_eq!("rebounds".parse::<StatField>(), Ok(StatField::Rebounds));
        assert_eq!(
            "three_pointers_made".parse::<StatField>(),
            Ok(StatField::ThreePointersMade)
        );
        assert!("dunks".parse::<StatField>().is_err());
    }

    #[test]
    fn test_stat_field_value() {
        let score = sample();
        assert_eq!(StatField::Points.value(&score), 31.0);
        assert_eq!(StatField::Assists.value(&score), 7.0);
        assert_eq!(StatField::MinutesPlayed.value(&score), 36.5);
    }

    #[test]
    fn test_box_score_line_formats_shooting() {
        let line = BoxScoreLine::new(&sample(), "Stephen Curry");
        assert_eq!(line.field_goals, "11/20");
        assert_eq!(line.three_pointers, "6/12");
        assert_eq!(line.free_throws, "3/3");
        assert_eq!(line.minutes, 36.5);
    }

    #[test]
    fn test_create_defaults_missing_counters() {
        let create: BoxScoreCreate =
            serde_json::from_str(r#"{"player_id": 4, "points": 12}"#).unwrap();
        assert_eq!(create.points, 12);
        assert_eq!(create.assists, 0);
        assert!(create.game_id.is_none());
    }
}
