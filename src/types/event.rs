//! Game event types
//!
//! A `GameEvent` is an immutable play-by-play record: once inserted it is
//! never updated, only removed together with its whole game.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of play recorded in the live feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ShotMade,
    ShotMissed,
    ThreePointer,
    FreeThrow,
    Assist,
    Rebound,
    Steal,
    Block,
    Foul,
    Turnover,
}

impl EventType {
    /// Every accepted event type, in schema order
    pub const ALL: [EventType; 10] = [
        EventType::ShotMade,
        EventType::ShotMissed,
        EventType::ThreePointer,
        EventType::FreeThrow,
        EventType::Assist,
        EventType::Rebound,
        EventType::Steal,
        EventType::Block,
        EventType::Foul,
        EventType::Turnover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::ShotMade => "shot_made",
            EventType::ShotMissed => "shot_missed",
            EventType::ThreePointer => "three_pointer",
            EventType::FreeThrow => "free_throw",
            EventType::Assist => "assist",
            EventType::Rebound => "rebound",
            EventType::Steal => "steal",
            EventType::Block => "block",
            EventType::Foul => "foul",
            EventType::Turnover => "turnover",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown event_type '{}'", s))
    }
}

/// An event as submitted by a client, before validation
///
/// Every field is optional here so that a missing required field is reported
/// as a validation failure rather than a decoding failure. `event_type` and
/// `quarter` stay loosely typed for the same reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewGameEvent {
    pub game_id: Option<i64>,
    pub event_type: Option<String>,
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub team: Option<String>,
    pub quarter: Option<i64>,
    pub time_remaining: Option<String>,
    pub description: Option<String>,
    /// Client-assigned occurrence time; the store assigns one when absent
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewGameEvent {
    /// Draft with the required fields set
    pub fn new(game_id: i64, event_type: EventType, player_name: &str, quarter: i64) -> Self {
        Self {
            game_id: Some(game_id),
            event_type: Some(event_type.as_str().to_string()),
            player_name: Some(player_name.to_string()),
            quarter: Some(quarter),
            ..Default::default()
        }
    }

    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn with_time_remaining(mut self, time_remaining: &str) -> Self {
        self.time_remaining = Some(time_remaining.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Pin the occurrence time instead of letting the store assign it
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A stored, immutable game event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// System-generated identifier, unique and increasing in insertion order
    pub id: u64,
    pub game_id: i64,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i64>,
    pub player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// 1-4, or 5 for overtime
    pub quarter: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl GameEvent {
    /// Serialize event to JSON string (for JSONL)
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize event from JSON string
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// One row of the event-type grouping aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeCount {
    pub event_type: EventType,
    pub count: usize,
}
