//! Domain layer - Entities, transport views and repository contracts

pub mod error;
pub mod player;
pub mod team;

pub use error::DomainError;
pub use player::{PlayerDto, PlayerEntity, PlayerId, PlayerRepository, PlayerValidationError};
pub use team::{
    TeamDto, TeamEntity, TeamId, TeamRepository, TeamSummaryDto, TeamUpdateDto,
    TeamValidationError,
};
