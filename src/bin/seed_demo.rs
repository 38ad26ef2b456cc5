//! Populate a data directory with a small demo league
//!
//! Reads the same environment as the server. Refuses to touch a data
//! directory that already holds players.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use tracing_subscriber::{fmt, EnvFilter};

use courtside_stats::{
    AppConfig, BoxScoreCreate, EventStore, EventType, GameCreate, GameStatus, League,
    NewGameEvent, PlayerCreate, StatsResult,
};
use courtside_stats::types::GameUpdate;
use courtside_stats::utils::season_for_date;

const PLAYERS: [(&str, &str, &str, f64, f64, u32, (i32, u32, u32)); 8] = [
    ("LeBron James", "Lakers", "SF", 81.0, 250.0, 23, (1984, 12, 30)),
    ("Stephen Curry", "Warriors", "PG", 75.0, 185.0, 30, (1988, 3, 14)),
    ("Kevin Durant", "Suns", "PF", 82.0, 240.0, 35, (1988, 9, 29)),
    ("Giannis Antetokounmpo", "Bucks", "PF", 83.0, 242.0, 34, (1994, 12, 6)),
    ("Anthony Davis", "Lakers", "PF", 82.0, 253.0, 3, (1993, 3, 11)),
    ("Nikola Jokic", "Nuggets", "C", 83.0, 284.0, 15, (1995, 2, 19)),
    ("Jayson Tatum", "Celtics", "SF", 80.0, 210.0, 0, (1998, 3, 3)),
    ("Joel Embiid", "76ers", "C", 84.0, 280.0, 21, (1994, 3, 16)),
];

/// home, away, home score, away score, date, completed
const GAMES: [(&str, &str, u32, u32, (i32, u32, u32), bool); 5] = [
    ("Lakers", "Warriors", 112, 108, (2024, 11, 2), true),
    ("Bucks", "Suns", 118, 115, (2024, 11, 3), true),
    ("Celtics", "Nuggets", 105, 110, (2024, 11, 4), true),
    ("76ers", "Lakers", 0, 0, (2024, 11, 14), false),
    ("Lakers", "Celtics", 0, 0, (2024, 11, 15), false),
];

/// player, game, pts, ast, reb, stl, blk, tov, fgm, fga, 3pm, 3pa, ftm, fta, min
type StatRow = (i64, i64, u32, u32, u32, u32, u32, u32, u32, u32, u32, u32, u32, u32, f64);

const STATS: [StatRow; 7] = [
    (1, 1, 28, 7, 9, 2, 1, 3, 10, 22, 2, 6, 6, 8, 36.5),
    (2, 1, 32, 6, 5, 3, 0, 2, 11, 20, 6, 12, 4, 4, 38.0),
    (5, 1, 24, 2, 12, 1, 3, 2, 9, 15, 0, 2, 6, 8, 32.0),
    (4, 2, 35, 5, 12, 1, 3, 4, 14, 24, 1, 3, 6, 9, 37.0),
    (3, 2, 29, 4, 8, 2, 2, 3, 11, 19, 3, 7, 4, 5, 35.5),
    (7, 3, 26, 5, 7, 1, 1, 2, 10, 20, 3, 8, 3, 4, 36.0),
    (6, 3, 31, 11, 14, 2, 1, 5, 12, 18, 2, 4, 5, 6, 38.5),
];

/// game, type, player, name, team, quarter, clock, description
const EVENTS: [(i64, EventType, i64, &str, &str, i64, &str, &str); 8] = [
    (1, EventType::ThreePointer, 2, "Stephen Curry", "Warriors", 1, "10:23", "Deep three from the logo"),
    (1, EventType::ShotMade, 1, "LeBron James", "Lakers", 1, "9:45", "Driving dunk"),
    (1, EventType::Assist, 1, "LeBron James", "Lakers", 1, "8:12", "Kick-out to the corner"),
    (1, EventType::Rebound, 5, "Anthony Davis", "Lakers", 2, "6:40", "Defensive board"),
    (1, EventType::Block, 5, "Anthony Davis", "Lakers", 4, "0:48", "Help-side block at the rim"),
    (2, EventType::ShotMade, 4, "Giannis Antetokounmpo", "Bucks", 1, "11:02", "Euro-step layup"),
    (2, EventType::Steal, 3, "Kevin Durant", "Suns", 3, "5:15", "Jumps the passing lane"),
    (3, EventType::Assist, 6, "Nikola Jokic", "Nuggets", 2, "3:30", "Full-court outlet"),
];

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn main() -> StatsResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {}", e);
    }

    let config = AppConfig::from_env()?;
    let league = League::open(&config.data_dir)?;
    if !league.snapshot().players.is_empty() {
        tracing::warn!(data_dir = %config.data_dir.display(), "Data directory already seeded");
        return Ok(());
    }

    for (name, team, position, height, weight, jersey_number, born) in PLAYERS {
        league.create_player(PlayerCreate {
            name: name.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            height,
            weight,
            jersey_number,
            birth_date: date(born),
        })?;
    }

    for (home, away, home_score, away_score, played, completed) in GAMES {
        let game = league.create_game(GameCreate {
            home_team: home.to_string(),
            away_team: away.to_string(),
            game_date: date(played),
            season: season_for_date(date(played)),
        })?;
        if completed {
            league.update_game(
                game.id,
                GameUpdate {
                    home_score: Some(home_score),
                    away_score: Some(away_score),
                    status: Some(GameStatus::Completed),
                },
            )?;
        }
    }

    for (player_id, game_id, pts, ast, reb, stl, blk, tov, fgm, fga, tpm, tpa, ftm, fta, min) in
        STATS
    {
        league.add_box_score(
            game_id,
            BoxScoreCreate {
                player_id,
                game_id: Some(game_id),
                points: pts,
                assists: ast,
                rebounds: reb,
                steals: stl,
                blocks: blk,
                turnovers: tov,
                fouls: 0,
                field_goals_made: fgm,
                field_goals_attempted: fga,
                three_pointers_made: tpm,
                three_pointers_attempted: tpa,
                free_throws_made: ftm,
                free_throws_attempted: fta,
                minutes_played: min,
            },
        )?;
    }

    let events = EventStore::open(config.event_store_config())?;
    let tip_off = Utc
        .with_ymd_and_hms(2024, 11, 2, 3, 30, 0)
        .single()
        .unwrap_or_else(Utc::now);
    for (offset, (game_id, event_type, player_id, name, team, quarter, clock, description)) in
        EVENTS.into_iter().enumerate()
    {
        let at = tip_off + Duration::days(game_id - 1) + Duration::minutes(offset as i64 * 7);
        events.insert(
            NewGameEvent::new(game_id, event_type, name, quarter)
                .with_player_id(player_id)
                .with_team(team)
                .with_time_remaining(clock)
                .with_description(description)
                .at(at),
        )?;
    }

    let data = league.snapshot();
    tracing::info!(
        players = data.players.len(),
        games = data.games.len(),
        box_scores = data.box_scores.len(),
        events = events.len(),
        "Demo data seeded"
    );
    events.close()
}
