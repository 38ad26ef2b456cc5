//! Courtside Stats
//!
//! A basketball statistics server: a durable store of live game events, a
//! league store of players, games and boxscores, grouping aggregations over
//! them, and a REST API built on axum.
//!
//! # Modules
//!
//! - `types`: Core data structures (GameEvent, Player, Game, BoxScore, stat views)
//! - `validation`: Pure checks run before anything is written
//! - `event_store`: Append-only event log with game, player and time indices
//! - `league`: Players, games and boxscores persisted as a JSONL snapshot
//! - `aggregation`: Group/reduce/sort pipeline and the leaderboards built on it
//! - `api`: REST endpoints
//! - `config`: Environment configuration
//! - `utils`: Atomic file writes, rounding and time helpers
//!
//! # Example
//!
//! ```no_run
//! use courtside_stats::{EventStore, NewGameEvent, EventType};
//!
//! let store = EventStore::in_memory();
//! let event = store
//!     .insert(NewGameEvent::new(1, EventType::ShotMade, "Stephen Curry", 1))
//!     .unwrap();
//! assert_eq!(store.events_for_game(1), vec![event]);
//! ```

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod event_store;
pub mod league;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use error::{StatsError, StatsResult};
pub use event_store::{EventStore, EventStoreConfig};
pub use league::{GameFilter, League, LeagueData, PlayerFilter};
pub use types::{
    BoxScore, BoxScoreCreate, EventType, EventTypeCount, Game, GameCreate, GameEvent, GameStatus,
    LeaderboardEntry, NewGameEvent, Player, PlayerCreate, StatField, TeamStats, TopScorer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
