//! Player repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{PlayerEntity, PlayerId};
use crate::domain::DomainError;

/// Repository for managing players
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert or update a player. Fails with `DomainError::Integrity` when
    /// the referenced team does not exist.
    async fn save(&self, player: PlayerEntity) -> Result<PlayerEntity, DomainError>;

    /// Delete a player by ID, returns whether a row was removed
    async fn delete_by_id(&self, id: &PlayerId) -> Result<bool, DomainError>;

    /// List all players in ascending ID order
    async fn find_all(&self) -> Result<Vec<PlayerEntity>, DomainError>;

    /// Get a player by ID
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<PlayerEntity>, DomainError>;

    /// Get a player by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerEntity>, DomainError>;
}
