//! Game endpoints, including boxscores and the per-game event feed

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::{ApiResult, Created};
use crate::aggregation;
use crate::api::state::AppState;
use crate::league::GameFilter;
use crate::types::{
    BoxScore, BoxScoreCreate, BoxScoreLine, Game, GameCreate, GameEvent, GameUpdate, NewGameEvent,
};

/// Query parameters for a game's event feed
#[derive(Debug, Default, Deserialize)]
pub struct GameEventParams {
    pub quarter: Option<i64>,
}

/// GET /api/games - Newest first
pub async fn list_games(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<GameFilter>,
) -> ApiResult<Json<Vec<Game>>> {
    Ok(Json(state.league.list_games(&filter)?))
}

/// POST /api/games
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(game): Json<GameCreate>,
) -> ApiResult<Created<Game>> {
    Ok(Created(state.league.create_game(game)?))
}

/// GET /api/games/:id
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Game>> {
    Ok(Json(state.league.get_game(id)?))
}

/// PUT /api/games/:id - Scores and status
pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<GameUpdate>,
) -> ApiResult<Json<Game>> {
    Ok(Json(state.league.update_game(id, update)?))
}

/// DELETE /api/games/:id - Cascades to boxscores and events
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.delete_game(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/games/:id/stats - One line per player
pub async fn game_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<BoxScoreLine>>> {
    let data = state.league.snapshot();
    Ok(Json(aggregation::game_box_score(&data, id)?))
}

/// POST /api/games/:id/stats
pub async fn add_game_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(stats): Json<BoxScoreCreate>,
) -> ApiResult<Created<BoxScore>> {
    Ok(Created(state.league.add_box_score(id, stats)?))
}

/// GET /api/games/:id/events - Chronological, or one quarter newest first
pub async fn game_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<GameEventParams>,
) -> ApiResult<Json<Vec<GameEvent>>> {
    state.league.get_game(id)?;
    let events = match params.quarter {
        Some(quarter) => state.events.events_for_game_and_quarter(id, quarter)?,
        None => state.events.events_for_game(id),
    };
    Ok(Json(events))
}

/// POST /api/games/:id/events
pub async fn record_game_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<NewGameEvent>,
) -> ApiResult<Created<GameEvent>> {
    Ok(Created(state.record_event(id, draft)?))
}
