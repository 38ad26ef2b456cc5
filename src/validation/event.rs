//! Game event schema

use chrono::{DateTime, Utc};

use crate::error::{StatsError, StatsResult};
use crate::types::{EventType, GameEvent, NewGameEvent};

/// First regulation quarter
pub const MIN_QUARTER: i64 = 1;

/// Quarter number used for overtime
pub const MAX_QUARTER: i64 = 5;

/// An event that passed validation and only lacks its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEvent {
    pub game_id: i64,
    pub event_type: EventType,
    pub player_id: Option<i64>,
    pub player_name: String,
    pub team: Option<String>,
    pub quarter: u8,
    pub time_remaining: Option<String>,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ValidEvent {
    /// Attach the store-assigned identifier
    pub fn into_event(self, id: u64) -> GameEvent {
        GameEvent {
            id,
            game_id: self.game_id,
            event_type: self.event_type,
            player_id: self.player_id,
            player_name: self.player_name,
            team: self.team,
            quarter: self.quarter,
            time_remaining: self.time_remaining,
            description: self.description,
            timestamp: self.timestamp,
        }
    }
}

/// Validate a submitted event
///
/// `now` becomes the event timestamp when the client did not supply one.
/// Every problem found is reported in a single `Validation` error.
pub fn validate_event(draft: &NewGameEvent, now: DateTime<Utc>) -> StatsResult<ValidEvent> {
    let mut problems = Vec::new();

    if draft.game_id.is_none() {
        problems.push("missing required field 'game_id'".to_string());
    }

    let event_type = match draft.event_type.as_deref() {
        None => {
            problems.push("missing required field 'event_type'".to_string());
            None
        }
        Some(raw) => match raw.parse::<EventType>() {
            Ok(t) => Some(t),
            Err(e) => {
                problems.push(e);
                None
            }
        },
    };

    match draft.player_name.as_deref() {
        None => problems.push("missing required field 'player_name'".to_string()),
        Some(name) if name.trim().is_empty() => {
            problems.push("'player_name' must not be blank".to_string())
        }
        Some(_) => {}
    }

    let quarter = match draft.quarter {
        None => {
            problems.push("missing required field 'quarter'".to_string());
            None
        }
        Some(q) => match validate_quarter(q) {
            Ok(q) => Some(q),
            Err(e) => {
                problems.push(e);
                None
            }
        },
    };

    if let Some(clock) = draft.time_remaining.as_deref() {
        if !is_game_clock(clock) {
            problems.push(format!("'time_remaining' must be MM:SS, got '{}'", clock));
        }
    }

    match (draft.game_id, event_type, quarter, &draft.player_name) {
        (Some(game_id), Some(event_type), Some(quarter), Some(player_name))
            if problems.is_empty() =>
        {
            Ok(ValidEvent {
                game_id,
                event_type,
                player_id: draft.player_id,
                player_name: player_name.clone(),
                team: draft.team.clone(),
                quarter,
                time_remaining: draft.time_remaining.clone(),
                description: draft.description.clone(),
                timestamp: draft.timestamp.unwrap_or(now),
            })
        }
        _ => Err(StatsError::validation(problems.join("; "))),
    }
}

/// Re-check an event read back from storage
///
/// Stored events already carry a parsed type and id, so only the value
/// constraints remain to verify.
pub fn validate_stored_event(event: &GameEvent) -> Result<(), String> {
    validate_quarter(i64::from(event.quarter))?;
    if event.player_name.trim().is_empty() {
        return Err("'player_name' must not be blank".to_string());
    }
    if let Some(clock) = event.time_remaining.as_deref() {
        if !is_game_clock(clock) {
            return Err(format!("'time_remaining' must be MM:SS, got '{}'", clock));
        }
    }
    Ok(())
}

/// Check a quarter number, returning it narrowed on success
pub fn validate_quarter(quarter: i64) -> Result<u8, String> {
    if (MIN_QUARTER..=MAX_QUARTER).contains(&quarter) {
        // In range, so it fits.
        Ok(quarter as u8)
    } else {
        Err(format!(
            "'quarter' must be between {} and {}, got {}",
            MIN_QUARTER, MAX_QUARTER, quarter
        ))
    }
}

/// `M:SS` or `MM:SS` with seconds below 60
fn is_game_clock(clock: &str) -> bool {
    let Some((minutes, seconds)) = clock.split_once(':') else {
        return false;
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    (1..=2).contains(&minutes.len())
        && digits(minutes)
        && seconds.len() == 2
        && digits(seconds)
        && seconds.parse::<u8>().map(|s| s < 60).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 19, 0, 0).unwrap()
    }

    fn draft() -> NewGameEvent {
        NewGameEvent::new(1, EventType::Rebound, "Bam Adebayo", 3)
    }

    #[test]
    fn test_valid_event_gets_server_timestamp() {
        let valid = validate_event(&draft(), now()).unwrap();
        assert_eq!(valid.game_id, 1);
        assert_eq!(valid.event_type, EventType::Rebound);
        assert_eq!(valid.quarter, 3);
        assert_eq!(valid.timestamp, now());
    }

    #[test]
    fn test_client_timestamp_is_kept() {
        let at = Utc.with_ymd_and_hms(2024, 1, 30, 1, 2, 3).unwrap();
        let valid = validate_event(&draft().at(at), now()).unwrap();
        assert_eq!(valid.timestamp, at);
    }

    #[test]
    fn test_every_quarter_in_range_is_accepted() {
        for quarter in 1..=5 {
            let event = NewGameEvent::new(1, EventType::Foul, "Draymond Green", quarter);
            assert!(validate_event(&event, now()).is_ok(), "quarter {}", quarter);
        }
    }

    #[test]
    fn test_quarter_out_of_range_is_rejected() {
        for quarter in [0, 6, -1] {
            let event = NewGameEvent::new(1, EventType::Foul, "Draymond Green", quarter);
            let err = validate_event(&event, now()).unwrap_err();
            assert!(matches!(err, StatsError::Validation(_)), "quarter {}", quarter);
        }
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let mut event = draft();
        event.event_type = Some("alley_oop".to_string());
        let err = validate_event(&event, now()).unwrap_err();
        assert!(err.to_string().contains("unknown event_type 'alley_oop'"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = validate_event(&NewGameEvent::default(), now()).unwrap_err();
        let message = err.to_string();
        for field in ["game_id", "event_type", "player_name", "quarter"] {
            assert!(message.contains(field), "{} not reported", field);
        }
    }

    #[test]
    fn test_blank_player_name_is_rejected() {
        let event = NewGameEvent::new(1, EventType::Assist, "   ", 1);
        assert!(validate_event(&event, now()).is_err());
    }

    #[test]
    fn test_game_clock_format() {
        assert!(is_game_clock("12:00"));
        assert!(is_game_clock("0:59"));
        assert!(is_game_clock("05:07"));
        assert!(!is_game_clock("5:7"));
        assert!(!is_game_clock("10:60"));
        assert!(!is_game_clock("123:00"));
        assert!(!is_game_clock("ab:cd"));
        assert!(!is_game_clock("1200"));

        let event = draft().with_time_remaining("7 min");
        assert!(validate_event(&event, now()).is_err());
    }

    #[test]
    fn test_stored_event_checks() {
        let event = validate_event(&draft(), now()).unwrap().into_event(1);
        assert!(validate_stored_event(&event).is_ok());

        let mut bad_quarter = event.clone();
        bad_quarter.quarter = 9;
        assert!(validate_stored_event(&bad_quarter).is_err());

        let mut blank = event.clone();
        blank.player_name = " ".to_string();
        assert!(validate_stored_event(&blank).is_err());

        let mut clock = event;
        clock.time_remaining = Some("99".to_string());
        assert!(validate_stored_event(&clock).is_err());
    }

    #[test]
    fn test_into_event_keeps_fields() {
        let valid = validate_event(&draft().with_team("Heat").with_player_id(13), now()).unwrap();
        let event = valid.into_event(42);
        assert_eq!(event.id, 42);
        assert_eq!(event.team.as_deref(), Some("Heat"));
        assert_eq!(event.player_id, Some(13));
    }
}
