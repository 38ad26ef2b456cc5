//! Grouping aggregations
//!
//! - `pipeline`: the three composable stages (group, reduce, sort/truncate)
//! - `leaders`: player and team views computed from boxscores

mod leaders;
mod pipeline;

pub use leaders::{
    game_box_score, leaderboard, player_season_stats, team_stats, top_scorers,
    DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT,
};
pub use pipeline::{group_by, reduce, sort_truncate, Group};
