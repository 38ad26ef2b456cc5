//! Time and season helpers

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// First month of a new season (October)
const SEASON_START_MONTH: u32 = 10;

/// Current time, used to stamp events the client did not stamp
pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

/// Season label a game date falls in, e.g. "2023-2024"
///
/// Seasons start in October; anything before that belongs to the season
/// that started the previous autumn.
pub fn season_for_date(date: NaiveDate) -> String {
    let start_year = if date.month() >= SEASON_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{}", start_year, start_year + 1)
}
