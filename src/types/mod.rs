//! Data types for the basketball statistics server
//!
//! Stored records (events, players, games, boxscores) and the computed views
//! derived from them.

mod box_score;
mod event;
mod game;
mod player;
mod summary;

pub use box_score::{BoxScore, BoxScoreCreate, BoxScoreLine, StatField};
pub use event::{EventType, EventTypeCount, GameEvent, NewGameEvent};
pub use game::{Game, GameCreate, GameStatus, GameUpdate};
pub use player::{Player, PlayerCreate, PlayerUpdate};
pub use summary::{
    LeaderboardEntry, PlayerSeasonStats, StatAverages, StatTotals, TeamStats, TopScorer,
};
