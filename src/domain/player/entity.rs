//! Player entity

use serde::{Deserialize, Serialize};

use super::validation::{validate_player_name, validate_position, PlayerValidationError};
use crate::domain::team::TeamId;

/// Player identifier - system-assigned primary key of the `player` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player entity, one row of the `player` table. Owns the foreign key to
/// its team.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntity {
    id: Option<PlayerId>,
    name: String,
    position: Option<String>,
    team_id: TeamId,
}

impl PlayerEntity {
    /// Create a new, unsaved player belonging to `team_id`
    pub fn new(name: impl Into<String>, team_id: TeamId) -> Result<Self, PlayerValidationError> {
        let name = name.into();
        validate_player_name(&name)?;

        Ok(Self {
            id: None,
            name,
            position: None,
            team_id,
        })
    }

    pub fn with_id(mut self, id: PlayerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_position(mut self, position: Option<String>) -> Result<Self, PlayerValidationError> {
        validate_position(position.as_deref())?;
        self.position = position;
        Ok(self)
    }

    pub fn id(&self) -> Option<PlayerId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }
}
