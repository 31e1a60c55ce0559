//! Team infrastructure implementations

mod repository;
mod service;

pub use repository::{InMemoryTeamRepository, PostgresTeamRepository};
pub use service::{TeamService, TeamUpdateOutcome};
