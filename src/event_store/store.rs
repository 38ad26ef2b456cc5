//! Event Store - durable game event collection
//!
//! The EventStore owns the append-only event log and the in-memory indices
//! built from it. Writes hit the log before the indices, so a failed write
//! never leaves a half-inserted event behind.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::StatsResult;
use crate::types::{EventTypeCount, GameEvent, NewGameEvent};
use crate::utils::{cleanup_temp_files, current_time};
use crate::validation::validate_event;

use super::index::EventCollection;
use super::log::EventLog;
use super::query;

/// File name of the event log inside the data directory
pub const EVENTS_FILE_NAME: &str = "events.jsonl";

/// Configuration for the EventStore
#[derive(Debug, Clone)]
pub struct EventStoreConfig {
    /// Path to the data directory
    pub data_dir: PathBuf,
}

impl Default for EventStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl EventStoreConfig {
    /// Create config with custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to events.jsonl
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join(EVENTS_FILE_NAME)
    }
}

struct Inner {
    collection: EventCollection,
    /// `None` for in-memory stores
    log: Option<EventLog>,
    next_id: u64,
}

/// Thread-safe store of game events
pub struct EventStore {
    inner: RwLock<Inner>,
}

impl EventStore {
    /// Open the store in `config.data_dir`, replaying any existing log
    pub fn open(config: EventStoreConfig) -> StatsResult<Self> {
        fs::create_dir_all(config.data_dir())?;
        let removed = cleanup_temp_files(config.data_dir())?;
        if removed > 0 {
            tracing::warn!(removed, "Removed leftover temp files");
        }

        let events_path = config.events_path();
        let log = EventLog::open(&events_path)?;
        let events = EventLog::replay(&events_path)?;
        let collection = EventCollection::from_events(events);
        let next_id = collection.max_id().map_or(1, |id| id + 1);

        tracing::info!(
            path = %events_path.display(),
            events = collection.len(),
            "Event store opened"
        );

        Ok(Self {
            inner: RwLock::new(Inner {
                collection,
                log: Some(log),
                next_id,
            }),
        })
    }

    /// An isolated store with no backing file
    pub fn in_memory() -> Self {
        Self {
            inner: RwLock::new(Inner {
                collection: EventCollection::default(),
                log: None,
                next_id: 1,
            }),
        }
    }

    /// Flush the log and release the store
    pub fn close(self) -> StatsResult<()> {
        let inner = self.inner.into_inner();
        if let Some(log) = &inner.log {
            log.sync()?;
        }
        tracing::info!(events = inner.collection.len(), "Event store closed");
        Ok(())
    }

    /// Validate and store an event, returning it with its assigned id
    pub fn insert(&self, draft: NewGameEvent) -> StatsResult<GameEvent> {
        let valid = validate_event(&draft, current_time())?;

        let mut inner = self.inner.write();
        let event = valid.into_event(inner.next_id);
        // A failed append may still have reached the file, so the id is spent.
        inner.next_id += 1;
        if let Some(log) = inner.log.as_mut() {
            log.append(&event)?;
        }
        inner.collection.insert(event.clone());

        tracing::debug!(
            event_id = event.id,
            game_id = event.game_id,
            event_type = %event.event_type,
            "Event recorded"
        );
        Ok(event)
    }

    /// Remove every event of a game, returning how many were removed
    pub fn delete_by_game(&self, game_id: i64) -> StatsResult<usize> {
        let mut inner = self.inner.write();
        if inner.collection.count_for_game(game_id) == 0 {
            return Ok(0);
        }

        let Inner {
            collection, log, ..
        } = &mut *inner;
        if let Some(log) = log.as_mut() {
            let kept = collection.iter().filter(|e| e.game_id != game_id);
            log.rewrite(kept).map_err(|e| {
                tracing::error!(game_id, error = %e, "Failed to rewrite event log");
                e
            })?;
        }
        let removed = collection.remove_game(game_id);

        tracing::info!(game_id, removed, "Game events deleted");
        Ok(removed)
    }

    pub fn events_for_game(&self, game_id: i64) -> Vec<GameEvent> {
        query::events_for_game(&self.inner.read().collection, game_id)
    }

    pub fn events_for_game_and_quarter(
        &self,
        game_id: i64,
        quarter: i64,
    ) -> StatsResult<Vec<GameEvent>> {
        query::events_for_game_and_quarter(&self.inner.read().collection, game_id, quarter)
    }

    /// Exact match on `player_name`; see [`EventStore::events_for_player_id`]
    pub fn events_for_player(&self, player_name: &str) -> Vec<GameEvent> {
        query::events_for_player(&self.inner.read().collection, player_name)
    }

    pub fn events_for_player_id(&self, player_id: i64) -> Vec<GameEvent> {
        query::events_for_player_id(&self.inner.read().collection, player_id)
    }

    pub fn event_type_counts(&self) -> Vec<EventTypeCount> {
        query::event_type_counts(&self.inner.read().collection)
    }

    pub fn latest_events(&self, limit: i64) -> StatsResult<Vec<GameEvent>> {
        query::latest_events(&self.inner.read().collection, limit)
    }

    pub fn len(&self) -> usize {
        self.inner.read().collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count_for_game(&self, game_id: i64) -> usize {
        self.inner.read().collection.count_for_game(game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use crate::types::EventType;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_store() -> (EventStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = EventStore::open(EventStoreConfig::new(temp_dir.path())).unwrap();
        (store, temp_dir)
    }

    fn rebound(game_id: i64, second: u32) -> NewGameEvent {
        NewGameEvent::new(game_id, EventType::Rebound, "Rudy Gobert", 3)
            .with_team("Timberwolves")
            .at(Utc.with_ymd_and_hms(2024, 4, 2, 21, 0, second).unwrap())
    }

    #[test]
    fn test_config_paths() {
        let config = EventStoreConfig::new("/tmp/courtside");
        assert_eq!(
            config.events_path(),
            PathBuf::from("/tmp/courtside/events.jsonl")
        );
        assert_eq!(EventStoreConfig::default().data_dir(), Path::new("data"));
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = EventStore::in_memory();
        let first = store.insert(rebound(1, 0)).unwrap();
        let second = store.insert(rebound(1, 1)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.player_name, "Rudy Gobert");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_invalid_event_is_not_stored() {
        let (store, temp_dir) = create_test_store();
        let mut draft = rebound(1, 0);
        draft.quarter = Some(6);

        assert!(matches!(store.insert(draft), Err(StatsError::Validation(_))));
        assert!(store.is_empty());

        let content = fs::read_to_string(temp_dir.path().join(EVENTS_FILE_NAME)).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_missing_timestamp_is_assigned() {
        let store = EventStore::in_memory();
        let before = Utc::now();
        let event = store
            .insert(NewGameEvent::new(1, EventType::Block, "Victor Wembanyama", 1))
            .unwrap();
        assert!(event.timestamp >= before);
    }

    #[test]
    fn test_reopen_continues_ids() {
        let (store, temp_dir) = create_test_store();
        store.insert(rebound(1, 0)).unwrap();
        store.insert(rebound(2, 1)).unwrap();
        store.close().unwrap();

        let reopened = EventStore::open(EventStoreConfig::new(temp_dir.path())).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.insert(rebound(1, 2)).unwrap().id, 3);
    }

    #[test]
    fn test_delete_by_game() {
        let (store, temp_dir) = create_test_store();
        store.insert(rebound(1, 0)).unwrap();
        store.insert(rebound(2, 1)).unwrap();
        store.insert(rebound(1, 2)).unwrap();

        assert_eq!(store.delete_by_game(1).unwrap(), 2);
        assert_eq!(store.delete_by_game(1).unwrap(), 0);
        assert_eq!(store.count_for_game(1), 0);
        assert_eq!(store.count_for_game(2), 1);

        // Appends after a rewrite land in the new file.
        store.insert(rebound(3, 3)).unwrap();
        store.close().unwrap();

        let reopened = EventStore::open(EventStoreConfig::new(temp_dir.path())).unwrap();
        assert_eq!(reopened.count_for_game(1), 0);
        assert_eq!(reopened.count_for_game(2), 1);
        assert_eq!(reopened.count_for_game(3), 1);
    }
}
