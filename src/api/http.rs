//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{events, games, players, stats};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Open CORS for the browser dashboard
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        // Players
        .route(
            "/api/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/api/players/:id",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route("/api/players/:id/stats", get(players::player_stats))
        .route("/api/players/:id/events", get(players::player_events))
        // Games
        .route("/api/games", get(games::list_games).post(games::create_game))
        .route(
            "/api/games/:id",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        .route(
            "/api/games/:id/stats",
            get(games::game_stats).post(games::add_game_stats),
        )
        .route(
            "/api/games/:id/events",
            get(games::game_events).post(games::record_game_event),
        )
        // Events
        .route("/api/events", get(events::player_events))
        .route("/api/events/latest", get(events::latest_events))
        .route("/api/events/counts", get(events::event_counts))
        // Stats
        .route("/api/stats/top-scorers", get(stats::top_scorers))
        .route("/api/stats/team", get(stats::team_stats))
        .route("/api/stats/leaderboard", get(stats::leaderboard))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// API info endpoint
async fn api_info() -> Json<Value> {
    Json(json!({
        "name": crate::NAME,
        "version": crate::VERSION,
        "endpoints": ["/api/players", "/api/games", "/api/events", "/api/stats"],
    }))
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
