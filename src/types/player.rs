//! Player roster types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rostered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
    /// Height in inches
    pub height: f64,
    /// Weight in pounds
    pub weight: f64,
    pub jersey_number: u32,
    pub birth_date: NaiveDate,
}

/// Payload for creating a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCreate {
    pub name: String,
    pub team: String,
    pub position: String,
    pub height: f64,
    pub weight: f64,
    pub jersey_number: u32,
    pub birth_date: NaiveDate,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub jersey_number: Option<u32>,
}

impl Player {
    pub(crate) fn from_create(id: i64, create: PlayerCreate) -> Self {
        Self {
            id,
            name: create.name,
            team: create.team,
            position: create.position,
            height: create.height,
            weight: create.weight,
            jersey_number: create.jersey_number,
            birth_date: create.birth_date,
        }
    }

    pub(crate) fn apply(&mut self, update: PlayerUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(team) = update.team {
            self.team = team;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(jersey_number) = update.jersey_number {
            self.jersey_number = jersey_number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_update() {
        let mut player = Player::from_create(
            1,
            PlayerCreate {
                name: "Kevin Durant".to_string(),
                team: "Suns".to_string(),
                position: "SF".to_string(),
                height: 82.0,
                weight: 240.0,
                jersey_number: 35,
                birth_date: NaiveDate::from_ymd_opt(1988, 9, 29).unwrap(),
            },
        );

        player.apply(PlayerUpdate {
            team: Some("Rockets".to_string()),
            jersey_number: Some(7),
            ..Default::default()
        });

        assert_eq!(player.team, "Rockets");
        assert_eq!(player.jersey_number, 7);
        assert_eq!(player.name, "Kevin Durant");
        assert_eq!(player.position, "SF");
    }
}
