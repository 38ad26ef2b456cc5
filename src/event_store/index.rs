//! In-memory event documents and their indices
//!
//! Every ordered index ends with the event id, so equal timestamps still
//! order deterministically.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use crate::types::GameEvent;

#[derive(Debug, Default)]
pub(crate) struct EventCollection {
    documents: BTreeMap<u64, GameEvent>,
    by_game: BTreeMap<i64, BTreeSet<u64>>,
    by_player: BTreeMap<i64, BTreeSet<u64>>,
    by_time_desc: BTreeSet<Reverse<(DateTime<Utc>, u64)>>,
    by_game_time: BTreeSet<(i64, DateTime<Utc>, u64)>,
}

impl EventCollection {
    /// Build from replayed events; a later event replaces an earlier one with the same id
    pub(crate) fn from_events(events: impl IntoIterator<Item = GameEvent>) -> Self {
        let mut collection = Self::default();
        for event in events {
            let id = event.id;
            if collection.insert(event).is_some() {
                tracing::warn!(event_id = id, "Duplicate event id in log, keeping the later one");
            }
        }
        collection
    }

    /// Index `event`, returning the event it replaced if the id was taken
    pub(crate) fn insert(&mut self, event: GameEvent) -> Option<GameEvent> {
        let id = event.id;
        let replaced = self.documents.remove(&id);
        if let Some(old) = &replaced {
            self.unindex(old);
        }

        self.by_game.entry(event.game_id).or_default().insert(id);
        if let Some(player_id) = event.player_id {
            self.by_player.entry(player_id).or_default().insert(id);
        }
        self.by_time_desc.insert(Reverse((event.timestamp, id)));
        self.by_game_time.insert((event.game_id, event.timestamp, id));
        self.documents.insert(id, event);
        replaced
    }

    /// Drop `event` from every index but the document map
    fn unindex(&mut self, event: &GameEvent) {
        let id = event.id;
        if let Some(ids) = self.by_game.get_mut(&event.game_id) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_game.remove(&event.game_id);
            }
        }
        if let Some(player_id) = event.player_id {
            if let Some(ids) = self.by_player.get_mut(&player_id) {
                ids.remove(&id);
                if ids.is_empty() {
                    self.by_player.remove(&player_id);
                }
            }
        }
        self.by_time_desc.remove(&Reverse((event.timestamp, id)));
        self.by_game_time.remove(&(event.game_id, event.timestamp, id));
    }

    /// Drop every event of `game_id`, returning how many went
    pub(crate) fn remove_game(&mut self, game_id: i64) -> usize {
        let Some(ids) = self.by_game.remove(&game_id) else {
            return 0;
        };

        for id in &ids {
            if let Some(event) = self.documents.remove(id) {
                self.unindex(&event);
            }
        }

        ids.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }

    pub(crate) fn count_for_game(&self, game_id: i64) -> usize {
        self.by_game.get(&game_id).map_or(0, BTreeSet::len)
    }

    pub(crate) fn max_id(&self) -> Option<u64> {
        self.documents.keys().next_back().copied()
    }

    /// All events in id order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.documents.values()
    }

    /// Events of one game, oldest first
    pub(crate) fn game_chronological(
        &self,
        game_id: i64,
    ) -> impl DoubleEndedIterator<Item = &GameEvent> {
        let start = (game_id, DateTime::<Utc>::MIN_UTC, 0);
        let end = (game_id, DateTime::<Utc>::MAX_UTC, u64::MAX);
        self.by_game_time
            .range(start..=end)
            .filter_map(|(_, _, id)| self.documents.get(id))
    }

    /// All events, newest first
    pub(crate) fn newest_first(&self) -> impl DoubleEndedIterator<Item = &GameEvent> {
        self.by_time_desc
            .iter()
            .filter_map(|Reverse((_, id))| self.documents.get(id))
    }

    /// Events tagged with `player_id`, in id order
    pub(crate) fn for_player_id(&self, player_id: i64) -> impl Iterator<Item = &GameEvent> {
        self.by_player
            .get(&player_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.documents.get(id))
    }
}
