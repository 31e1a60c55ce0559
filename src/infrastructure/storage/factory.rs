//! Storage factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, PlayerRepository, TeamRepository};
use crate::infrastructure::player::{InMemoryPlayerRepository, PostgresPlayerRepository};
use crate::infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository};

use super::in_memory::InMemoryStore;
use super::migrations::run_roster_migrations;
use super::postgres::{connect_pool, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    InMemory,
    Postgres(PostgresConfig),
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Team and player repositories backed by the same store
#[derive(Clone)]
pub struct Repositories {
    pub teams: Arc<dyn TeamRepository>,
    pub players: Arc<dyn PlayerRepository>,
}

/// Factory for creating repository instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates both repositories for the configured backend. The PostgreSQL
    /// backend applies pending migrations before returning.
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config {
            StorageConfig::InMemory => Ok(Self::create_in_memory()),
            StorageConfig::Postgres(pg_config) => {
                let pool = connect_pool(pg_config).await?;
                let applied = run_roster_migrations(&pool).await?;
                info!(applied, "PostgreSQL schema up to date");

                Ok(Repositories {
                    teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
                    players: Arc::new(PostgresPlayerRepository::new(pool)),
                })
            }
        }
    }

    /// Creates repositories sharing a fresh in-memory store
    pub fn create_in_memory() -> Repositories {
        let store = Arc::new(InMemoryStore::new());

        Repositories {
            teams: Arc::new(InMemoryTeamRepository::new(store.clone())),
            players: Arc::new(InMemoryPlayerRepository::new(store)),
        }
    }
}
