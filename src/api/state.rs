//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    DomainError, PlayerDto, PlayerRepository, TeamDto, TeamId, TeamRepository, TeamSummaryDto,
    TeamUpdateDto,
};
use crate::infrastructure::player::PlayerService;
use crate::infrastructure::storage::Repositories;
use crate::infrastructure::team::{TeamService, TeamUpdateOutcome};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub player_service: Arc<dyn PlayerServiceTrait>,
}

impl AppState {
    pub fn new(
        team_service: Arc<dyn TeamServiceTrait>,
        player_service: Arc<dyn PlayerServiceTrait>,
    ) -> Self {
        Self {
            team_service,
            player_service,
        }
    }

    /// Wire both services over one set of repositories
    pub fn from_repositories(repositories: Repositories) -> Self {
        let team_service = TeamService::new(repositories.teams.clone());
        let player_service = PlayerService::new(repositories.players, repositories.teams);

        Self::new(Arc::new(team_service), Arc::new(player_service))
    }
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn add_team(&self, request: TeamDto) -> Result<String, DomainError>;
    async fn get_team(&self, team_name: &str) -> Result<TeamDto, DomainError>;
    async fn list_teams(&self) -> Result<Vec<TeamSummaryDto>, DomainError>;
    async fn update_team(
        &self,
        id: TeamId,
        request: TeamUpdateDto,
    ) -> Result<TeamUpdateOutcome, DomainError>;
    async fn delete_team(&self, id: TeamId) -> Result<String, DomainError>;
}

/// Trait for player service operations
#[async_trait::async_trait]
pub trait PlayerServiceTrait: Send + Sync {
    async fn add_player(&self, request: PlayerDto) -> Result<String, DomainError>;
    async fn get_player(&self, name: &str) -> Result<PlayerDto, DomainError>;
}

#[async_trait::async_trait]
impl<R> TeamServiceTrait for TeamService<R>
where
    R: TeamRepository + ?Sized + 'static,
{
    async fn add_team(&self, request: TeamDto) -> Result<String, DomainError> {
        TeamService::add_team(self, request).await
    }

    async fn get_team(&self, team_name: &str) -> Result<TeamDto, DomainError> {
        TeamService::get_team(self, team_name).await
    }

    async fn list_teams(&self) -> Result<Vec<TeamSummaryDto>, DomainError> {
        TeamService::list_teams(self).await
    }

    async fn update_team(
        &self,
        id: TeamId,
        request: TeamUpdateDto,
    ) -> Result<TeamUpdateOutcome, DomainError> {
        TeamService::update_team(self, id, request).await
    }

    async fn delete_team(&self, id: TeamId) -> Result<String, DomainError> {
        TeamService::delete_team(self, id).await
    }
}

#[async_trait::async_trait]
impl<P, T> PlayerServiceTrait for PlayerService<P, T>
where
    P: PlayerRepository + ?Sized + 'static,
    T: TeamRepository + ?Sized + 'static,
{
    async fn add_player(&self, request: PlayerDto) -> Result<String, DomainError> {
        PlayerService::add_player(self, request).await
    }

    async fn get_player(&self, name: &str) -> Result<PlayerDto, DomainError> {
        PlayerService::get_player(self, name).await
    }
}
