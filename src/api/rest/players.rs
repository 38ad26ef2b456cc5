//! Player endpoints

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
use crate::league::PlayerFilter;
use crate::types::{GameEvent, Player, PlayerCreate, PlayerSeasonStats, PlayerUpdate};

/// Optional season restriction shared by the stats endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SeasonParams {
    pub season: Option<String>,
}

/// GET /api/players - List players with filters and pagination
pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PlayerFilter>,
) -> ApiResult<Json<Vec<Player>>> {
    Ok(Json(state.league.list_players(&filter)?))
}

/// POST /api/players
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(player): Json<PlayerCreate>,
) -> ApiResult<Created<Player>> {
    Ok(Created(state.league.create_player(player)?))
}

/// GET /api/players/:id
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Player>> {
    Ok(Json(state.league.get_player(id)?))
}

/// PUT /api/players/:id - Partial update
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<PlayerUpdate>,
) -> ApiResult<Json<Player>> {
    Ok(Json(state.league.update_player(id, update)?))
}

/// DELETE /api/players/:id - Also removes the player's boxscores
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.league.delete_player(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/players/:id/stats - Season totals and averages
pub async fn player_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<SeasonParams>,
) -> ApiResult<Json<PlayerSeasonStats>> {
    let data = state.league.snapshot();
    let stats = aggregation::player_season_stats(&data, id, params.season.as_deref())?;
    Ok(Json(stats))
}

/// GET /api/players/:id/events - Events tagged with this player, oldest first
pub async fn player_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<GameEvent>>> {
    state.league.get_player(id)?;
    Ok(Json(state.events.events_for_player_id(id)))
}
