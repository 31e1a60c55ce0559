//! Team service for the team use cases

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{TeamDto, TeamEntity, TeamId, TeamRepository, TeamSummaryDto, TeamUpdateDto};
use crate::domain::DomainError;

/// Result of an update request. A missing team is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamUpdateOutcome {
    Updated(TeamId),
    NotFound(TeamId),
}

impl TeamUpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    pub fn message(&self) -> String {
        match self {
            Self::Updated(id) => format!("Team with id {} updated", id),
            Self::NotFound(id) => format!("Team with id {} not found, nothing updated", id),
        }
    }
}

/// Team service orchestrating the team repository and the team views
pub struct TeamService<R: TeamRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TeamRepository + ?Sized> TeamService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Add a team, returns a confirmation naming it
    pub async fn add_team(&self, request: TeamDto) -> Result<String, DomainError> {
        info!(team_name = %request.team_name, "Adding team");

        let team = TeamEntity::try_from(request).map_err(|e| DomainError::validation(e.to_string()))?;
        let saved = self.repository.save(team).await?;

        debug!(team_name = %saved.team_name(), id = ?saved.id(), "Team saved");
        Ok(format!("Team {} added", saved.team_name()))
    }

    /// Get a team by name with all of its fields
    pub async fn get_team(&self, team_name: &str) -> Result<TeamDto, DomainError> {
        let team = self
            .repository
            .find_by_team_name(team_name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", team_name)))?;

        Ok(TeamDto::from(&team))
    }

    /// List all teams without the champion flag, in store order
    pub async fn list_teams(&self) -> Result<Vec<TeamSummaryDto>, DomainError> {
        let teams = self.repository.find_all().await?;
        Ok(teams.iter().map(TeamSummaryDto::from).collect())
    }

    /// Apply a partial update to the team with the given ID
    pub async fn update_team(
        &self,
        id: TeamId,
        request: TeamUpdateDto,
    ) -> Result<TeamUpdateOutcome, DomainError> {
        info!(id = %id, "Updating team");

        let Some(mut team) = self.repository.find_by_id(&id).await? else {
            debug!(id = %id, "Team to update does not exist");
            return Ok(TeamUpdateOutcome::NotFound(id));
        };

        if request.is_empty() {
            debug!(id = %id, "Update carries no fields");
        }

        request
            .apply_to(&mut team)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        self.repository.save(team).await?;

        Ok(TeamUpdateOutcome::Updated(id))
    }

    /// Delete a team and its players. Deleting an absent ID also succeeds.
    pub async fn delete_team(&self, id: TeamId) -> Result<String, DomainError> {
        info!(id = %id, "Deleting team");

        let deleted = self.repository.delete_by_id(&id).await?;
        debug!(id = %id, deleted, "Team delete finished");

        Ok(format!("Team with id {} deleted", id))
    }
}
