//! Write operations for the league store

use crate::error::{StatsError, StatsResult};
use crate::types::{
    BoxScore, BoxScoreCreate, Game, GameCreate, GameUpdate, Player, PlayerCreate, PlayerUpdate,
};
use crate::validation::{validate_box_score, validate_game, validate_player, validate_player_update};

use super::League;

fn player_not_found(id: i64) -> StatsError {
    StatsError::not_found(format!("Player {} not found", id))
}

fn game_not_found(id: i64) -> StatsError {
    StatsError::not_found(format!("Game {} not found", id))
}

pub fn create_player(league: &League, player: PlayerCreate) -> StatsResult<Player> {
    validate_player(&player)?;
    league.mutate(|data| {
        let player = Player::from_create(data.next_player_id, player);
        data.next_player_id += 1;
        data.players.push(player.clone());
        tracing::debug!(player_id = player.id, name = %player.name, "Player created");
        Ok(player)
    })
}

pub fn update_player(league: &League, id: i64, update: PlayerUpdate) -> StatsResult<Player> {
    validate_player_update(&update)?;
    league.mutate(|data| {
        let player = data
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| player_not_found(id))?;
        player.apply(update);
        Ok(player.clone())
    })
}

pub fn delete_player(league: &League, id: i64) -> StatsResult<()> {
    league.mutate(|data| {
        let before = data.players.len();
        data.players.retain(|p| p.id != id);
        if data.players.len() == before {
            return Err(player_not_found(id));
        }
        data.box_scores.retain(|s| s.player_id != id);
        tracing::debug!(player_id = id, "Player deleted");
        Ok(())
    })
}

pub fn create_game(league: &League, game: GameCreate) -> StatsResult<Game> {
    validate_game(&game)?;
    league.mutate(|data| {
        let game = Game::from_create(data.next_game_id, game);
        data.next_game_id += 1;
        data.games.push(game.clone());
        tracing::debug!(game_id = game.id, "Game created");
        Ok(game)
    })
}

pub fn update_game(league: &League, id: i64, update: GameUpdate) -> StatsResult<Game> {
    league.mutate(|data| {
        let game = data
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| game_not_found(id))?;
        game.apply(update);
        Ok(game.clone())
    })
}

pub fn delete_game(league: &League, id: i64) -> StatsResult<()> {
    league.mutate(|data| {
        let before = data.games.len();
        data.games.retain(|g| g.id != id);
        if data.games.len() == before {
            return Err(game_not_found(id));
        }
        data.box_scores.retain(|s| s.game_id != id);
        tracing::debug!(game_id = id, "Game deleted");
        Ok(())
    })
}

/// Record a boxscore for `game_id`; the path game wins over any body value
pub fn add_box_score(league: &League, game_id: i64, stats: BoxScoreCreate) -> StatsResult<BoxScore> {
    validate_box_score(&stats)?;
    league.mutate(|data| {
        if !data.games.iter().any(|g| g.id == game_id) {
            return Err(game_not_found(game_id));
        }
        if !data.players.iter().any(|p| p.id == stats.player_id) {
            return Err(player_not_found(stats.player_id));
        }
        let score = BoxScore::from_create(data.next_box_score_id, game_id, stats);
        data.next_box_score_id += 1;
        data.box_scores.push(score.clone());
        Ok(score)
    })
}
