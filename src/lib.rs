//! League Roster API
//!
//! Teams and their players over HTTP, stored in memory or in PostgreSQL.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::{create_router, AppState};
pub use config::AppConfig;

use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create the application state with the default (in-memory) configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state for the configured storage backend
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage.storage_config()?;
    info!(backend = ?storage_config.storage_type(), "Initializing storage");

    let repositories = StorageFactory::create(&storage_config).await?;
    Ok(AppState::from_repositories(repositories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_uses_memory() {
        let state = create_app_state().await.unwrap();
        assert!(state.team_service.list_teams().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend_fails() {
        let mut config = AppConfig::default();
        config.storage.backend = "sqlite".to_string();

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
