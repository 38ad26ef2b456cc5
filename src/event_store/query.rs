//! Read-only event queries
//!
//! Pure functions of a collection's current state. `EventStore` runs them
//! under its read lock.

use crate::aggregation::{group_by, reduce, sort_truncate};
use crate::error::{StatsError, StatsResult};
use crate::types::{EventTypeCount, GameEvent};
use crate::validation::validate_quarter;

use super::index::EventCollection;

/// Number of events returned by the latest-events feed when unspecified
pub const DEFAULT_LATEST_LIMIT: i64 = 10;

/// Events of one game, oldest first
pub(crate) fn events_for_game(collection: &EventCollection, game_id: i64) -> Vec<GameEvent> {
    collection.game_chronological(game_id).cloned().collect()
}

/// Events of one quarter of a game, newest first
pub(crate) fn events_for_game_and_quarter(
    collection: &EventCollection,
    game_id: i64,
    quarter: i64,
) -> StatsResult<Vec<GameEvent>> {
    let quarter = validate_quarter(quarter).map_err(StatsError::invalid_argument)?;
    Ok(collection
        .game_chronological(game_id)
        .rev()
        .filter(|e| e.quarter == quarter)
        .cloned()
        .collect())
}

/// Events whose `player_name` matches exactly, oldest first
///
/// Names are neither unique nor stable; prefer [`events_for_player_id`].
pub(crate) fn events_for_player(collection: &EventCollection, player_name: &str) -> Vec<GameEvent> {
    collection
        .newest_first()
        .rev()
        .filter(|e| e.player_name == player_name)
        .cloned()
        .collect()
}

/// Events tagged with a player id, oldest first
pub(crate) fn events_for_player_id(collection: &EventCollection, player_id: i64) -> Vec<GameEvent> {
    let mut events: Vec<GameEvent> = collection.for_player_id(player_id).cloned().collect();
    events.sort_by_key(|e| (e.timestamp, e.id));
    events
}

/// How many events of each type exist, most frequent first
pub(crate) fn event_type_counts(collection: &EventCollection) -> Vec<EventTypeCount> {
    let groups = group_by(collection.iter(), |e| e.event_type);
    let counts = reduce(groups, |group| {
        Some(EventTypeCount {
            event_type: group.key,
            count: group.rows.len(),
        })
    });
    sort_truncate(counts, |a, b| b.count.cmp(&a.count), None)
}

/// The `limit` most recent events across all games, newest first
pub(crate) fn latest_events(collection: &EventCollection, limit: i64) -> StatsResult<Vec<GameEvent>> {
    if limit <= 0 {
        return Err(StatsError::invalid_argument(format!(
            "limit must be positive, got {}",
            limit
        )));
    }
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    Ok(collection.newest_first().take(limit).cloned().collect())
}
