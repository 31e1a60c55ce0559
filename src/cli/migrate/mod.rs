//! Migrate command - brings the PostgreSQL schema up to date and exits

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{
    connect_pool, revert_latest_migration, run_roster_migrations, StorageConfig,
};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Revert the most recently applied migration instead
    #[arg(long)]
    pub revert: bool,
}

pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    let StorageConfig::Postgres(pg_config) = config.storage.storage_config()? else {
        anyhow::bail!("migrate requires storage.backend = \"postgres\"");
    };

    let pool = connect_pool(&pg_config).await?;

    if args.revert {
        match revert_latest_migration(&pool).await? {
            Some(version) => info!(version, "Reverted migration"),
            None => info!("No migration to revert"),
        }
    } else {
        let applied = run_roster_migrations(&pool).await?;
        info!(applied, "Migrations applied");
    }

    pool.close().await;
    Ok(())
}
