//! Team repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{TeamEntity, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert the team if it has no (or an unknown) ID, otherwise update it.
    /// Returns the stored team with its ID assigned.
    async fn save(&self, team: TeamEntity) -> Result<TeamEntity, DomainError>;

    /// Delete a team and, through the foreign key, all of its players.
    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// List all teams in ascending ID order
    async fn find_all(&self) -> Result<Vec<TeamEntity>, DomainError>;

    /// Get a team by ID
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamEntity>, DomainError>;

    /// Get a team by its unique name
    async fn find_by_team_name(&self, team_name: &str) -> Result<Option<TeamEntity>, DomainError>;
}
