//! Team repository implementations

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

use crate::domain::{DomainError, TeamEntity, TeamId, TeamRepository};
use crate::infrastructure::storage::{map_sqlx_error, InMemoryStore};

/// In-memory implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryTeamRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: TeamEntity) -> Result<TeamEntity, DomainError> {
        self.store.save_team(team)
    }

    async fn delete_by_id(&self, id: &TeamId) -> Result<bool, DomainError> {
        self.store.delete_team(id)
    }

    async fn find_all(&self) -> Result<Vec<TeamEntity>, DomainError> {
        self.store.teams()
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamEntity>, DomainError> {
        self.store.team(id)
    }

    async fn find_by_team_name(&self, team_name: &str) -> Result<Option<TeamEntity>, DomainError> {
        self.store.team_by_name(team_name)
    }
}

#[derive(Debug, FromRow)]
struct TeamRow {
    id: i64,
    team_name: String,
    wins: Option<i32>,
    losses: Option<i32>,
    is_current_champion: Option<bool>,
}

impl TryFrom<TeamRow> for TeamEntity {
    type Error = DomainError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        let invalid = |e: crate::domain::TeamValidationError| {
            DomainError::storage(format!("Invalid team row {}: {}", row.id, e))
        };

        Ok(TeamEntity::new(row.team_name.clone())
            .map_err(invalid)?
            .with_id(TeamId::new(row.id))
            .with_wins(row.wins)
            .map_err(invalid)?
            .with_losses(row.losses)
            .map_err(invalid)?
            .with_current_champion(row.is_current_champion))
    }
}

const TEAM_COLUMNS: &str = "id, team_name, wins, losses, is_current_champion";

/// PostgreSQL implementation of TeamRepository over the `team` table
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: TeamEntity) -> Result<TeamEntity, DomainError> {
        let row: TeamRow = match team.id() {
            None => {
                let query = format!(
                    r#"
                    INSERT INTO team (team_name, wins, losses, is_current_champion)
                    VALUES ($1, $2, $3, $4)
                    RETURNING {}
                    "#,
                    TEAM_COLUMNS
                );

                sqlx::query_as(&query)
                    .bind(team.team_name())
                    .bind(team.wins())
                    .bind(team.losses())
                    .bind(team.is_current_champion())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_sqlx_error("Failed to insert team", e))?
            }
            Some(id) => {
                let query = format!(
                    r#"
                    INSERT INTO team (id, team_name, wins, losses, is_current_champion)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE SET
                        team_name = EXCLUDED.team_name,
                        wins = EXCLUDED.wins,
                        losses = EXCLUDED.losses,
                        is_current_champion = EXCLUDED.is_current_champion
                    RETURNING {}
                    "#,
                    TEAM_COLUMNS
                );

                sqlx::query_as(&query)
                    .bind(id.value())
                    .bind(team.team_name())
                    .bind(team.wins())
                    .bind(team.losses())
                    .bind(team.is_current_champion())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_sqlx_error("Failed to save team", e))?
            }
        };

        row.try_into()
    }

    async fn delete_by_id(&self, id: &TeamId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM team WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete team", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<TeamEntity>, DomainError> {
        let query = format!("SELECT {} FROM team ORDER BY id", TEAM_COLUMNS);

        let rows: Vec<TeamRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list teams", e))?;

        rows.into_iter().map(TeamEntity::try_from).collect()
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamEntity>, DomainError> {
        let query = format!("SELECT {} FROM team WHERE id = $1", TEAM_COLUMNS);

        let row: Option<TeamRow> = sqlx::query_as(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to get team", e))?;

        row.map(TeamEntity::try_from).transpose()
    }

    async fn find_by_team_name(&self, team_name: &str) -> Result<Option<TeamEntity>, DomainError> {
        let query = format!("SELECT {} FROM team WHERE team_name = $1", TEAM_COLUMNS);

        let row: Option<TeamRow> = sqlx::query_as(&query)
            .bind(team_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to get team by name", e))?;

        row.map(TeamEntity::try_from).transpose()
    }
}
