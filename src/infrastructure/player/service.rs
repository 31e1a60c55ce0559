//! Player service for the player use cases

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::player::{PlayerDto, PlayerEntity, PlayerRepository};
use crate::domain::team::TeamRepository;
use crate::domain::DomainError;

/// Player service. Reads go through the team repository to resolve the
/// player's team name.
pub struct PlayerService<P: PlayerRepository + ?Sized, T: TeamRepository + ?Sized> {
    players: Arc<P>,
    teams: Arc<T>,
}

impl<P: PlayerRepository + ?Sized, T: TeamRepository + ?Sized> PlayerService<P, T> {
    pub fn new(players: Arc<P>, teams: Arc<T>) -> Self {
        Self { players, teams }
    }

    /// Add a player to an existing team, returns a confirmation naming it
    pub async fn add_player(&self, request: PlayerDto) -> Result<String, DomainError> {
        info!(name = %request.name, team_id = ?request.team_id, "Adding player");

        let player =
            PlayerEntity::try_from(request).map_err(|e| DomainError::validation(e.to_string()))?;
        let saved = self.players.save(player).await?;

        debug!(name = %saved.name(), id = ?saved.id(), team_id = %saved.team_id(), "Player saved");
        Ok(format!("Player {} added", saved.name()))
    }

    /// Get a player by name, with the name of the team it belongs to
    pub async fn get_player(&self, name: &str) -> Result<PlayerDto, DomainError> {
        let player = self
            .players
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", name)))?;

        let Some(team) = self.teams.find_by_id(&player.team_id()).await? else {
            warn!(name = %name, team_id = %player.team_id(), "Player references a missing team");
            return Err(DomainError::integrity(format!(
                "Team {} of player '{}' does not exist",
                player.team_id(),
                name
            )));
        };

        Ok(PlayerDto::from_entity(&player, &team))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::MockPlayerRepository;
    use crate::domain::team::{MockTeamRepository, TeamEntity, TeamId};
    use crate::infrastructure::player::InMemoryPlayerRepository;
    use crate::infrastructure::storage::InMemoryStore;
    use crate::infrastructure::team::InMemoryTeamRepository;

    type InMemoryPlayerService = PlayerService<InMemoryPlayerRepository, InMemoryTeamRepository>;

    fn create_service() -> (InMemoryPlayerService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = PlayerService::new(
            Arc::new(InMemoryPlayerRepository::new(store.clone())),
            Arc::new(InMemoryTeamRepository::new(store.clone())),
        );
        (service, store)
    }

    fn dak(team_id: i64) -> PlayerDto {
        PlayerDto {
            name: "Dak-Prescott".to_string(),
            position: Some("Quarterback".to_string()),
            team_id: Some(TeamId::new(team_id)),
            team_name: None,
        }
    }

    #[tokio::test]
    async fn test_add_and_get_player() {
        let (service, store) = create_service();
        store.save_team(TeamEntity::new("Cowboys").unwrap()).unwrap();

        let message = service.add_player(dak(1)).await.unwrap();
        assert!(message.contains("Dak-Prescott"));

        let player = service.get_player("Dak-Prescott").await.unwrap();
        assert_eq!(player.name, "Dak-Prescott");
        assert_eq!(player.position.as_deref(), Some("Quarterback"));
        assert_eq!(player.team_name.as_deref(), Some("Cowboys"));
        assert!(player.team_id.is_none());
    }

    #[tokio::test]
    async fn test_add_player_without_position() {
        let (service, store) = create_service();
        store.save_team(TeamEntity::new("Cowboys").unwrap()).unwrap();

        let mut request = dak(1);
        request.position = None;
        service.add_player(request).await.unwrap();

        let player = service.get_player("Dak-Prescott").await.unwrap();
        assert!(player.position.is_none());
    }

    #[tokio::test]
    async fn test_add_player_unknown_team() {
        let (service, _) = create_service();

        let result = service.add_player(dak(9999)).await;
        assert!(matches!(result, Err(DomainError::Integrity { .. })));
        assert!(service.get_player("Dak-Prescott").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_add_player_missing_team_id() {
        let (service, _) = create_service();
        let mut request = dak(1);
        request.team_id = None;

        let result = service.add_player(request).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_add_duplicate_player() {
        let (service, store) = create_service();
        store.save_team(TeamEntity::new("Cowboys").unwrap()).unwrap();
        service.add_player(dak(1)).await.unwrap();

        let result = service.add_player(dak(1)).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_get_missing_player() {
        let (service, _) = create_service();

        let result = service.get_player("Nobody").await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_player_gone_after_team_delete() {
        let (service, store) = create_service();
        store.save_team(TeamEntity::new("Cowboys").unwrap()).unwrap();
        service.add_player(dak(1)).await.unwrap();

        store.delete_team(&TeamId::new(1)).unwrap();

        assert!(service.get_player("Dak-Prescott").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_player_with_dangling_team() {
        let mut players = MockPlayerRepository::new();
        players.expect_find_by_name().returning(|name| {
            Ok(Some(PlayerEntity::new(name, TeamId::new(3)).unwrap()))
        });

        let mut teams = MockTeamRepository::new();
        teams
            .expect_find_by_id()
            .withf(|id| *id == TeamId::new(3))
            .returning(|_| Ok(None));

        let service = PlayerService::new(Arc::new(players), Arc::new(teams));

        let result = service.get_player("Dak-Prescott").await;
        assert!(matches!(result, Err(DomainError::Integrity { .. })));
    }

    #[tokio::test]
    async fn test_add_player_rejected_before_save() {
        let mut players = MockPlayerRepository::new();
        players.expect_save().never();
        let teams = MockTeamRepository::new();

        let service = PlayerService::new(Arc::new(players), Arc::new(teams));

        let mut request = dak(1);
        request.name = String::new();

        let result = service.add_player(request).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
