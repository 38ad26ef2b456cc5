//! League store - players, games and boxscores
//!
//! Holds the roster and schedule in memory behind a `RwLock` and persists the
//! whole state as a JSONL snapshot after every write. A write is applied to a
//! working copy, persisted, and only then published, so a failed write leaves
//! both the file and the in-memory state untouched.

mod crud;
mod query;

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::StatsResult;
use crate::types::{
    BoxScore, BoxScoreCreate, Game, GameCreate, GameUpdate, Player, PlayerCreate, PlayerUpdate,
};
use crate::utils::{atomic_write_json_lines, cleanup_temp_files};

pub use query::{GameFilter, PlayerFilter, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

/// File name of the league snapshot inside the data directory
pub const LEAGUE_FILE_NAME: &str = "league.jsonl";

/// Everything the league store holds
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub box_scores: Vec<BoxScore>,
    pub(crate) next_player_id: i64,
    pub(crate) next_game_id: i64,
    pub(crate) next_box_score_id: i64,
}

impl LeagueData {
    fn from_records(records: Vec<LeagueRecord>) -> Self {
        let mut data = LeagueData::default();
        for record in records {
            match record {
                LeagueRecord::Player(p) => data.players.push(p),
                LeagueRecord::Game(g) => data.games.push(g),
                LeagueRecord::BoxScore(s) => data.box_scores.push(s),
            }
        }
        data.next_player_id = data.players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        data.next_game_id = data.games.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        data.next_box_score_id = data.box_scores.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        data
    }

    fn to_records(&self) -> Vec<LeagueRecord> {
        self.players
            .iter()
            .cloned()
            .map(LeagueRecord::Player)
            .chain(self.games.iter().cloned().map(LeagueRecord::Game))
            .chain(self.box_scores.iter().cloned().map(LeagueRecord::BoxScore))
            .collect()
    }
}

/// One line of the league snapshot file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum LeagueRecord {
    Player(Player),
    Game(Game),
    BoxScore(BoxScore),
}

/// Thread-safe league store
pub struct League {
    path: Option<PathBuf>,
    data: RwLock<LeagueData>,
}

impl League {
    /// Open the league snapshot in `data_dir`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(data_dir: P) -> StatsResult<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        cleanup_temp_files(data_dir)?;

        let path = data_dir.join(LEAGUE_FILE_NAME);
        let data = Self::load(&path)?;
        tracing::info!(
            path = %path.display(),
            players = data.players.len(),
            games = data.games.len(),
            box_scores = data.box_scores.len(),
            "League store opened"
        );

        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    /// An isolated store with no backing file
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(LeagueData::from_records(Vec::new())),
        }
    }

    fn load(path: &Path) -> StatsResult<LeagueData> {
        if !path.exists() {
            return Ok(LeagueData::from_records(Vec::new()));
        }

        let content = fs::read_to_string(path)?;
        let mut records = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<LeagueRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(
                    line = line_num + 1,
                    error = %e,
                    "Skipping unreadable league record"
                ),
            }
        }

        Ok(LeagueData::from_records(records))
    }

    fn persist(&self, data: &LeagueData) -> StatsResult<()> {
        if let Some(path) = &self.path {
            atomic_write_json_lines(path, &data.to_records()).map_err(|e| {
                tracing::error!(path = %path.display(), error = %e, "Failed to persist league");
                e
            })?;
        }
        Ok(())
    }

    /// Apply `change` to a working copy, persist it, then publish it
    pub(crate) fn mutate<R>(
        &self,
        change: impl FnOnce(&mut LeagueData) -> StatsResult<R>,
    ) -> StatsResult<R> {
        let mut guard = self.data.write();
        let mut draft = guard.clone();
        let result = change(&mut draft)?;
        self.persist(&draft)?;
        *guard = draft;
        Ok(result)
    }

    /// A consistent copy of the current state for aggregation
    pub fn snapshot(&self) -> LeagueData {
        self.data.read().clone()
    }

    /// Path of the snapshot file, if file-backed
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// Operations from the submodules
impl League {
    pub fn create_player(&self, player: PlayerCreate) -> StatsResult<Player> {
        crud::create_player(self, player)
    }

    pub fn update_player(&self, id: i64, update: PlayerUpdate) -> StatsResult<Player> {
        crud::update_player(self, id, update)
    }

    /// Delete a player and their boxscores
    pub fn delete_player(&self, id: i64) -> StatsResult<()> {
        crud::delete_player(self, id)
    }

    pub fn create_game(&self, game: GameCreate) -> StatsResult<Game> {
        crud::create_game(self, game)
    }

    pub fn update_game(&self, id: i64, update: GameUpdate) -> StatsResult<Game> {
        crud::update_game(self, id, update)
    }

    /// Delete a game and its boxscores
    ///
    /// Events live in the event store; callers cascade those separately.
    pub fn delete_game(&self, id: i64) -> StatsResult<()> {
        crud::delete_game(self, id)
    }

    pub fn add_box_score(&self, game_id: i64, stats: BoxScoreCreate) -> StatsResult<BoxScore> {
        crud::add_box_score(self, game_id, stats)
    }

    pub fn get_player(&self, id: i64) -> StatsResult<Player> {
        query::get_player(self, id)
    }

    pub fn list_players(&self, filter: &PlayerFilter) -> StatsResult<Vec<Player>> {
        query::list_players(self, filter)
    }

    pub fn get_game(&self, id: i64) -> StatsResult<Game> {
        query::get_game(self, id)
    }

    pub fn list_games(&self, filter: &GameFilter) -> StatsResult<Vec<Game>> {
        query::list_games(self, filter)
    }
}
