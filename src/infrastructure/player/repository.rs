//! Player repository implementations

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

use crate::domain::{DomainError, PlayerEntity, PlayerId, PlayerRepository, TeamId};
use crate::infrastructure::storage::{map_sqlx_error, InMemoryStore};

/// In-memory implementation of PlayerRepository
#[derive(Debug, Clone)]
pub struct InMemoryPlayerRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPlayerRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn save(&self, player: PlayerEntity) -> Result<PlayerEntity, DomainError> {
        self.store.save_player(player)
    }

    async fn delete_by_id(&self, id: &PlayerId) -> Result<bool, DomainError> {
        self.store.delete_player(id)
    }

    async fn find_all(&self) -> Result<Vec<PlayerEntity>, DomainError> {
        self.store.players()
    }

    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<PlayerEntity>, DomainError> {
        self.store.player(id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerEntity>, DomainError> {
        self.store.player_by_name(name)
    }
}

#[derive(Debug, FromRow)]
struct PlayerRow {
    id: i64,
    name: String,
    position: Option<String>,
    team_id: i64,
}

impl TryFrom<PlayerRow> for PlayerEntity {
    type Error = DomainError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid = move |e: crate::domain::PlayerValidationError| {
            DomainError::storage(format!("Invalid player row {}: {}", id, e))
        };

        Ok(PlayerEntity::new(row.name, TeamId::new(row.team_id))
            .map_err(invalid)?
            .with_id(PlayerId::new(row.id))
            .with_position(row.position)
            .map_err(invalid)?)
    }
}

const PLAYER_COLUMNS: &str = "id, name, position, team_id";

/// PostgreSQL implementation of PlayerRepository over the `player` table
#[derive(Debug, Clone)]
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn save(&self, player: PlayerEntity) -> Result<PlayerEntity, DomainError> {
        let row: PlayerRow = match player.id() {
            None => {
                let query = format!(
                    r#"
                    INSERT INTO player (name, position, team_id)
                    VALUES ($1, $2, $3)
                    RETURNING {}
                    "#,
                    PLAYER_COLUMNS
                );

                sqlx::query_as(&query)
                    .bind(player.name())
                    .bind(player.position())
                    .bind(player.team_id().value())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_sqlx_error("Failed to insert player", e))?
            }
            Some(id) => {
                let query = format!(
                    r#"
                    INSERT INTO player (id, name, position, team_id)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        position = EXCLUDED.position,
                        team_id = EXCLUDED.team_id
                    RETURNING {}
                    "#,
                    PLAYER_COLUMNS
                );

                sqlx::query_as(&query)
                    .bind(id.value())
                    .bind(player.name())
                    .bind(player.position())
                    .bind(player.team_id().value())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_sqlx_error("Failed to save player", e))?
            }
        };

        row.try_into()
    }

    async fn delete_by_id(&self, id: &PlayerId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM player WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete player", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<PlayerEntity>, DomainError> {
        let query = format!("SELECT {} FROM player ORDER BY id", PLAYER_COLUMNS);

        let rows: Vec<PlayerRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list players", e))?;

        rows.into_iter().map(PlayerEntity::try_from).collect()
    }

    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<PlayerEntity>, DomainError> {
        let query = format!("SELECT {} FROM player WHERE id = $1", PLAYER_COLUMNS);

        let row: Option<PlayerRow> = sqlx::query_as(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to get player", e))?;

        row.map(PlayerEntity::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerEntity>, DomainError> {
        let query = format!("SELECT {} FROM player WHERE name = $1", PLAYER_COLUMNS);

        let row: Option<PlayerRow> = sqlx::query_as(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to get player by name", e))?;

        row.map(PlayerEntity::try_from).transpose()
    }
}
