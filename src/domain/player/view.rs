//! Transport view of a player
//!
//! `teamId` is write-only: it is read from request bodies and never
//! serialized. `teamName` is read-only: it is denormalized from the related
//! team on the way out and ignored on the way in.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::PlayerEntity;
use super::validation::PlayerValidationError;
use crate::domain::team::{TeamEntity, TeamId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    pub position: Option<String>,
    #[serde(default, skip_serializing)]
    #[validate(required(message = "teamId is required"))]
    pub team_id: Option<TeamId>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl PlayerDto {
    /// Build the read view of a player. `team` must be the player's related
    /// team; its name becomes `teamName`.
    pub fn from_entity(player: &PlayerEntity, team: &TeamEntity) -> Self {
        debug_assert_eq!(team.id(), Some(player.team_id()));

        Self {
            name: player.name().to_string(),
            position: player.position().map(String::from),
            team_id: None,
            team_name: Some(team.team_name().to_string()),
        }
    }
}

impl TryFrom<PlayerDto> for PlayerEntity {
    type Error = PlayerValidationError;

    fn try_from(dto: PlayerDto) -> Result<Self, Self::Error> {
        let team_id = dto.team_id.ok_or(PlayerValidationError::MissingTeamId)?;

        PlayerEntity::new(dto.name, team_id)?.with_position(dto.position)
    }
}
