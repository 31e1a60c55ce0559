//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_record, validate_team_id, validate_team_name, TeamValidationError};

/// Team identifier - system-assigned primary key of the `team` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an ID from a request path segment
    pub fn parse(id: &str) -> Result<Self, TeamValidationError> {
        validate_team_id(id).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity, one row of the `team` table.
///
/// The entity does not own the foreign key of its players; the
/// relationship is resolved from the player side.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamEntity {
    /// Primary key, `None` until the team has been saved
    id: Option<TeamId>,
    team_name: String,
    wins: Option<i32>,
    losses: Option<i32>,
    is_current_champion: Option<bool>,
}

impl TeamEntity {
    /// Create a new, unsaved team
    pub fn new(team_name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let team_name = team_name.into();
        validate_team_name(&team_name)?;

        Ok(Self {
            id: None,
            team_name,
            wins: None,
            losses: None,
            is_current_champion: None,
        })
    }

    /// Attach a primary key (used by stores when loading or inserting rows)
    pub fn with_id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_wins(mut self, wins: Option<i32>) -> Result<Self, TeamValidationError> {
        self.set_wins(wins)?;
        Ok(self)
    }

    pub fn with_losses(mut self, losses: Option<i32>) -> Result<Self, TeamValidationError> {
        self.set_losses(losses)?;
        Ok(self)
    }

    pub fn with_current_champion(mut self, is_current_champion: Option<bool>) -> Self {
        self.is_current_champion = is_current_champion;
        self
    }

    // Getters

    pub fn id(&self) -> Option<TeamId> {
        self.id
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn wins(&self) -> Option<i32> {
        self.wins
    }

    pub fn losses(&self) -> Option<i32> {
        self.losses
    }

    pub fn is_current_champion(&self) -> Option<bool> {
        self.is_current_champion
    }

    // Mutators

    pub fn set_wins(&mut self, wins: Option<i32>) -> Result<(), TeamValidationError> {
        validate_record("wins", wins)?;
        self.wins = wins;
        Ok(())
    }

    pub fn set_losses(&mut self, losses: Option<i32>) -> Result<(), TeamValidationError> {
        validate_record("losses", losses)?;
        self.losses = losses;
        Ok(())
    }

    pub fn set_current_champion(&mut self, is_current_champion: Option<bool>) {
        self.is_current_champion = is_current_champion;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_parse() {
        let id = TeamId::parse("7").unwrap();
        assert_eq!(id.value(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_team_id_parse_invalid() {
        assert!(TeamId::parse("seven").is_err());
        assert!(TeamId::parse("0").is_err());
    }

    #[test]
    fn test_team_id_serializes_as_number() {
        let json = serde_json::to_string(&TeamId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: TeamId = serde_json::from_str("12").unwrap();
        assert_eq!(id, TeamId::new(12));
    }

    #[test]
    fn test_team_creation() {
        let team = TeamEntity::new("Cowboys").unwrap();

        assert!(team.id().is_none());
        assert_eq!(team.team_name(), "Cowboys");
        assert!(team.wins().is_none());
        assert!(team.losses().is_none());
        assert!(team.is_current_champion().is_none());
    }

    #[test]
    fn test_team_builder() {
        let team = TeamEntity::new("Cowboys")
            .unwrap()
            .with_id(TeamId::new(1))
            .with_wins(Some(10))
            .unwrap()
            .with_losses(Some(6))
            .unwrap()
            .with_current_champion(Some(false));

        assert_eq!(team.id(), Some(TeamId::new(1)));
        assert_eq!(team.wins(), Some(10));
        assert_eq!(team.losses(), Some(6));
        assert_eq!(team.is_current_champion(), Some(false));
    }

    #[test]
    fn test_team_invalid_name() {
        assert!(TeamEntity::new("").is_err());
    }

    #[test]
    fn test_team_negative_wins() {
        let result = TeamEntity::new("Cowboys").unwrap().with_wins(Some(-2));
        assert_eq!(result, Err(TeamValidationError::NegativeRecord("wins")));
    }

    #[test]
    fn test_team_mutators() {
        let mut team = TeamEntity::new("Cowboys").unwrap();

        team.set_wins(Some(12)).unwrap();
        team.set_current_champion(Some(true));

        assert_eq!(team.wins(), Some(12));
        assert_eq!(team.is_current_champion(), Some(true));
        assert!(team.set_losses(Some(-1)).is_err());
        assert!(team.losses().is_none());
    }
}
