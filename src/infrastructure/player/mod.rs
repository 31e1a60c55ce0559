//! Player infrastructure implementations

mod repository;
mod service;

pub use repository::{InMemoryPlayerRepository, PostgresPlayerRepository};
pub use service::PlayerService;
