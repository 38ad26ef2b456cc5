//! Shared application state for the REST handlers

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StatsResult;
use crate::event_store::EventStore;
use crate::league::League;
use crate::types::{GameEvent, NewGameEvent};

/// Handles to both stores, cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub league: Arc<League>,
    pub events: Arc<EventStore>,
    /// Shared by event recording, exclusive for game deletion, so an event
    /// never lands on a game that is being deleted
    games: Arc<RwLock<()>>,
}

impl AppState {
    pub fn new(league: Arc<League>, events: Arc<EventStore>) -> Self {
        Self {
            league,
            events,
            games: Arc::new(RwLock::new(())),
        }
    }

    /// Fresh stores with no backing files
    pub fn in_memory() -> Self {
        Self::new(Arc::new(League::in_memory()), Arc::new(EventStore::in_memory()))
    }

    /// Record an event for an existing game
    ///
    /// `game_id` wins over any id carried in the body.
    pub fn record_event(&self, game_id: i64, mut draft: NewGameEvent) -> StatsResult<GameEvent> {
        let _games = self.games.read();
        self.league.get_game(game_id)?;
        draft.game_id = Some(game_id);
        self.events.insert(draft)
    }

    /// Delete a game together with its boxscores and events
    ///
    /// Events go first: if that fails the game is still there and the
    /// delete can be retried.
    pub fn delete_game(&self, game_id: i64) -> StatsResult<usize> {
        let _games = self.games.write();
        self.league.get_game(game_id)?;

        let removed = self.events.delete_by_game(game_id).map_err(|e| {
            tracing::error!(game_id, error = %e, "Failed to delete game events");
            e
        })?;
        self.league.delete_game(game_id).map_err(|e| {
            tracing::error!(game_id, error = %e, "Failed to delete game after its events");
            e
        })?;

        tracing::info!(game_id, events_removed = removed, "Game deleted");
        Ok(removed)
    }
}
