//! Event Store Module
//!
//! Durable storage and indexed lookup of live game events:
//! - `EventStore`: validated inserts, cascade deletes and the read queries
//! - `EventLog`: the append-only `events.jsonl` behind it
//! - `EventCollection`: documents plus their game, player and time indices
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌──────────┐    ┌───────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ REST     │───►│ validate      │───►│ append+fsync │───►│ index update │
//! │ request  │    │ (pure)        │    │ events.jsonl │    │ (in memory)  │
//! └──────────┘    └───────────────┘    └──────────────┘    └──────────────┘
//!
//! Read Path (Startup):
//! ┌───────────────┐    ┌─────────────────┐
//! │ Replay log    │───►│ Build indices   │───► Ready!
//! │ (events.jsonl)│    │                 │
//! └───────────────┘    └─────────────────┘
//! ```

mod index;
mod log;
mod query;
mod store;

pub use query::DEFAULT_LATEST_LIMIT;
pub use store::{EventStore, EventStoreConfig, EVENTS_FILE_NAME};
