//! Stats endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResult};
use crate::aggregation::{self, DEFAULT_LEADERBOARD_LIMIT};
use crate::api::state::AppState;
use crate::types::{LeaderboardEntry, StatField, TeamStats, TopScorer};

#[derive(Debug, Default, Deserialize)]
pub struct TopScorerParams {
    pub limit: Option<i64>,
    pub season: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    pub team: Option<String>,
    pub season: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    /// Defaults to points
    pub stat: Option<String>,
    pub limit: Option<i64>,
    pub season: Option<String>,
}

/// GET /api/stats/top-scorers
pub async fn top_scorers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopScorerParams>,
) -> ApiResult<Json<Vec<TopScorer>>> {
    let data = state.league.snapshot();
    let limit = params.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    Ok(Json(aggregation::top_scorers(
        &data,
        limit,
        params.season.as_deref(),
    )?))
}

/// GET /api/stats/team
pub async fn team_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TeamParams>,
) -> ApiResult<Json<TeamStats>> {
    let team = params
        .team
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("team is required"))?;

    let data = state.league.snapshot();
    Ok(Json(aggregation::team_stats(
        &data,
        team,
        params.season.as_deref(),
    )?))
}

/// GET /api/stats/leaderboard
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let stat = match params.stat.as_deref() {
        Some(name) => name.parse::<StatField>().map_err(ApiError::bad_request)?,
        None => StatField::default(),
    };
    let limit = params.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);

    let data = state.league.snapshot();
    Ok(Json(aggregation::leaderboard(
        &data,
        stat,
        limit,
        params.season.as_deref(),
    )?))
}
