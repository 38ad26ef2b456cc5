//! Cross-game event endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::event_store::DEFAULT_LATEST_LIMIT;
use crate::types::{EventTypeCount, GameEvent};

#[derive(Debug, Default, Deserialize)]
pub struct LatestParams {
    pub limit: Option<i64>,
}

/// Lookup by player; `player_id` takes precedence over `player_name`
#[derive(Debug, Default, Deserialize)]
pub struct PlayerEventParams {
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
}

/// GET /api/events/latest - Most recent events across all games
pub async fn latest_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LatestParams>,
) -> ApiResult<Json<Vec<GameEvent>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LATEST_LIMIT);
    Ok(Json(state.events.latest_events(limit)?))
}

/// GET /api/events/counts - Events per type, most frequent first
pub async fn event_counts(State(state): State<Arc<AppState>>) -> Json<Vec<EventTypeCount>> {
    Json(state.events.event_type_counts())
}

/// GET /api/events - Events of one player, oldest first
pub async fn player_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerEventParams>,
) -> ApiResult<Json<Vec<GameEvent>>> {
    match (params.player_id, params.player_name.as_deref()) {
        (Some(player_id), _) => Ok(Json(state.events.events_for_player_id(player_id))),
        (None, Some(name)) if !name.trim().is_empty() => {
            Ok(Json(state.events.events_for_player(name)))
        }
        _ => Err(ApiError::bad_request(
            "player_id or player_name is required",
        )),
    }
}
