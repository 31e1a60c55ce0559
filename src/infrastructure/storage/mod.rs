//! Storage infrastructure - Backends for the roster schema

mod factory;
mod in_memory;
pub mod migrations;
mod postgres;

pub use factory::{Repositories, StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryStore;
pub use migrations::{revert_latest_migration, run_roster_migrations, Migration, PostgresMigrator};
pub(crate) use postgres::map_sqlx_error;
pub use postgres::{connect_pool, PostgresConfig};
