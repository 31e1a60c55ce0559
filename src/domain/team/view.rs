//! Transport views of a team and the field mapping to and from [`TeamEntity`]
//!
//! Each view fixes which fields cross the API boundary and in which
//! direction:
//!
//! | view             | direction  | fields                                             |
//! |------------------|------------|----------------------------------------------------|
//! | `TeamDto`        | read/write | teamName, wins, losses, isCurrentChampion          |
//! | `TeamSummaryDto` | read only  | teamName, wins, losses                             |
//! | `TeamUpdateDto`  | write only | wins, losses, isCurrentChampion (each optional)    |

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::TeamEntity;
use super::validation::TeamValidationError;

/// Full team view including the champion flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "teamName is required"))]
    pub team_name: String,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub is_current_champion: Option<bool>,
}

impl From<&TeamEntity> for TeamDto {
    fn from(team: &TeamEntity) -> Self {
        Self {
            team_name: team.team_name().to_string(),
            wins: team.wins(),
            losses: team.losses(),
            is_current_champion: team.is_current_champion(),
        }
    }
}

impl TryFrom<TeamDto> for TeamEntity {
    type Error = TeamValidationError;

    fn try_from(dto: TeamDto) -> Result<Self, Self::Error> {
        Ok(TeamEntity::new(dto.team_name)?
            .with_wins(dto.wins)?
            .with_losses(dto.losses)?
            .with_current_champion(dto.is_current_champion))
    }
}

/// List view of a team; the champion flag is never exposed here
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryDto {
    pub team_name: String,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
}

impl From<&TeamEntity> for TeamSummaryDto {
    fn from(team: &TeamEntity) -> Self {
        Self {
            team_name: team.team_name().to_string(),
            wins: team.wins(),
            losses: team.losses(),
        }
    }
}

/// Partial update of a team. Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdateDto {
    #[validate(range(min = 0, message = "wins cannot be negative"))]
    pub wins: Option<i32>,
    #[validate(range(min = 0, message = "losses cannot be negative"))]
    pub losses: Option<i32>,
    pub is_current_champion: Option<bool>,
}

impl TeamUpdateDto {
    /// Overwrite the fields present in this update onto an existing team.
    /// Validation happens before any field is written.
    pub fn apply_to(&self, team: &mut TeamEntity) -> Result<(), TeamValidationError> {
        let mut updated = team.clone();

        if let Some(wins) = self.wins {
            updated.set_wins(Some(wins))?;
        }

        if let Some(losses) = self.losses {
            updated.set_losses(Some(losses))?;
        }

        if let Some(champion) = self.is_current_champion {
            updated.set_current_champion(Some(champion));
        }

        *team = updated;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_none() && self.losses.is_none() && self.is_current_champion.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamId;

    fn cowboys_dto() -> TeamDto {
        TeamDto {
            team_name: "Cowboys".to_string(),
            wins: Some(10),
            losses: Some(6),
            is_current_champion: Some(false),
        }
    }

    fn stored_cowboys() -> TeamEntity {
        TeamEntity::try_from(cowboys_dto())
            .unwrap()
            .with_id(TeamId::new(1))
    }

    #[test]
    fn test_team_dto_round_trip() {
        let dto = cowboys_dto();
        let entity = TeamEntity::try_from(dto.clone()).unwrap();

        assert_eq!(TeamDto::from(&entity), dto);
    }

    #[test]
    fn test_team_dto_round_trip_with_absent_fields() {
        let dto = TeamDto {
            team_name: "Bears".to_string(),
            wins: None,
            losses: None,
            is_current_champion: None,
        };
        let entity = TeamEntity::try_from(dto.clone()).unwrap();

        assert_eq!(TeamDto::from(&entity), dto);
    }

    #[test]
    fn test_team_dto_to_entity_leaves_id_unassigned() {
        let entity = TeamEntity::try_from(cowboys_dto()).unwrap();
        assert!(entity.id().is_none());
    }

    #[test]
    fn test_team_dto_rejects_empty_name() {
        let mut dto = cowboys_dto();
        dto.team_name = String::new();

        assert_eq!(
            TeamEntity::try_from(dto),
            Err(TeamValidationError::EmptyName)
        );
    }

    #[test]
    fn test_team_dto_json_field_names() {
        let json = serde_json::to_value(TeamDto::from(&stored_cowboys())).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "teamName": "Cowboys",
                "wins": 10,
                "losses": 6,
                "isCurrentChampion": false
            })
        );
    }

    #[test]
    fn test_team_dto_missing_name_fails_validation() {
        let dto: TeamDto = serde_json::from_str(r#"{"wins": 3}"#).unwrap();

        assert_eq!(dto.team_name, "");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_summary_never_exposes_champion() {
        let mut champion = stored_cowboys();
        champion.set_current_champion(Some(true));

        for team in [stored_cowboys(), champion] {
            let json = serde_json::to_value(TeamSummaryDto::from(&team)).unwrap();
            let object = json.as_object().unwrap();

            assert!(!object.contains_key("isCurrentChampion"));
            assert_eq!(object["teamName"], "Cowboys");
            assert_eq!(object.len(), 3);
        }
    }

    #[test]
    fn test_update_overwrites_only_present_fields() {
        let mut team = stored_cowboys();
        let update = TeamUpdateDto {
            wins: Some(11),
            ..Default::default()
        };

        update.apply_to(&mut team).unwrap();

        assert_eq!(team.wins(), Some(11));
        assert_eq!(team.losses(), Some(6));
        assert_eq!(team.is_current_champion(), Some(false));
        assert_eq!(team.team_name(), "Cowboys");
        assert_eq!(team.id(), Some(TeamId::new(1)));
    }

    #[test]
    fn test_update_ignores_team_name_in_body() {
        let update: TeamUpdateDto =
            serde_json::from_str(r#"{"teamName": "Eagles", "isCurrentChampion": true}"#).unwrap();
        let mut team = stored_cowboys();

        update.apply_to(&mut team).unwrap();

        assert_eq!(team.team_name(), "Cowboys");
        assert_eq!(team.is_current_champion(), Some(true));
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let update = TeamUpdateDto::default();
        let mut team = stored_cowboys();

        update.apply_to(&mut team).unwrap();

        assert!(update.is_empty());
        assert_eq!(team, stored_cowboys());
    }

    #[test]
    fn test_invalid_update_leaves_team_untouched() {
        let update = TeamUpdateDto {
            wins: Some(12),
            losses: Some(-1),
            is_current_champion: None,
        };
        let mut team = stored_cowboys();

        assert!(update.apply_to(&mut team).is_err());
        assert_eq!(team, stored_cowboys());
    }
}
