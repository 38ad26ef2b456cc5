//! Computed stat views
//!
//! None of these are persisted. They are rebuilt from boxscores on every
//! query so they can never go stale.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::StatField;

/// A ranked scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopScorer {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub avg_points: f64,
    pub games_played: usize,
}

/// Team-wide per-boxscore averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: String,
    /// The season filter, or "all"
    pub season: String,
    pub avg_points: f64,
    pub avg_assists: f64,
    pub avg_rebounds: f64,
    pub total_games: usize,
}

/// A ranked player for an arbitrary stat
///
/// Serialized with the average under `avg_<stat>`, e.g. `avg_assists`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub stat: StatField,
    pub average: f64,
    pub games_played: usize,
}

impl Serialize for LeaderboardEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("player_id", &self.player_id)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("team", &self.team)?;
        map.serialize_entry(&format!("avg_{}", self.stat), &self.average)?;
        map.serialize_entry("games_played", &self.games_played)?;
        map.end()
    }
}

/// Season sums for one player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTotals {
    pub points: u64,
    pub assists: u64,
    pub rebounds: u64,
    pub steals: u64,
    pub blocks: u64,
    pub turnovers: u64,
    pub field_goals_made: u64,
    pub field_goals_attempted: u64,
    pub three_pointers_made: u64,
    pub three_pointers_attempted: u64,
    pub minutes_played: f64,
}

/// Per-game averages and shooting percentages for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatAverages {
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    /// 0 when no field goals were attempted
    pub field_goal_pct: f64,
    /// 0 when no threes were attempted
    pub three_point_pct: f64,
    pub minutes: f64,
}

/// A player's season line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub total_games: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<StatTotals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub averages: Option<StatAverages>,
}

impl PlayerSeasonStats {
    /// Season line for a player without any recorded games
    pub fn empty() -> Self {
        Self {
            total_games: 0,
            totals: None,
            averages: None,
        }
    }
}
