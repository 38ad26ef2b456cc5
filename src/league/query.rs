//! Read operations for the league store

use serde::Deserialize;

use crate::error::{StatsError, StatsResult};
use crate::types::{Game, GameStatus, Player};

use super::League;

/// Page size when no limit is given
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Largest page a caller may ask for
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Player list filter, also used as the query string of `GET /api/players`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerFilter {
    pub team: Option<String>,
    pub position: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Game list filter, also used as the query string of `GET /api/games`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameFilter {
    pub season: Option<String>,
    pub status: Option<GameStatus>,
    /// Matches either the home or the away team
    pub team: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

fn page(skip: Option<i64>, limit: Option<i64>) -> StatsResult<(usize, usize)> {
    let skip = skip.unwrap_or(0);
    if skip < 0 {
        return Err(StatsError::invalid_argument("skip must not be negative"));
    }
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if limit <= 0 || limit > MAX_PAGE_LIMIT {
        return Err(StatsError::invalid_argument(format!(
            "limit must be between 1 and {}",
            MAX_PAGE_LIMIT
        )));
    }
    Ok((skip as usize, limit as usize))
}

pub fn get_player(league: &League, id: i64) -> StatsResult<Player> {
    league
        .data
        .read()
        .players
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| StatsError::not_found(format!("Player {} not found", id)))
}

pub fn list_players(league: &League, filter: &PlayerFilter) -> StatsResult<Vec<Player>> {
    let (skip, limit) = page(filter.skip, filter.limit)?;
    let data = league.data.read();

    Ok(data
        .players
        .iter()
        .filter(|p| filter.team.as_deref().map_or(true, |t| p.team == t))
        .filter(|p| filter.position.as_deref().map_or(true, |pos| p.position == pos))
        .skip(skip)
        .take(limit)
        .cloned()
        .collect())
}

pub fn get_game(league: &League, id: i64) -> StatsResult<Game> {
    league
        .data
        .read()
        .games
        .iter()
        .find(|g| g.id == id)
        .cloned()
        .ok_or_else(|| StatsError::not_found(format!("Game {} not found", id)))
}

/// Games matching `filter`, most recent first
pub fn list_games(league: &League, filter: &GameFilter) -> StatsResult<Vec<Game>> {
    let (skip, limit) = page(filter.skip, filter.limit)?;
    let data = league.data.read();

    let mut games: Vec<&Game> = data
        .games
        .iter()
        .filter(|g| filter.season.as_deref().map_or(true, |s| g.season == s))
        .filter(|g| filter.status.map_or(true, |s| g.status == s))
        .filter(|g| filter.team.as_deref().map_or(true, |t| g.involves(t)))
        .collect();
    games.sort_by(|a, b| b.game_date.cmp(&a.game_date).then(a.id.cmp(&b.id)));

    Ok(games.into_iter().skip(skip).take(limit).cloned().collect())
}
