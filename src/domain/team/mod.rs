//! Team domain module
//!
//! A team is a franchise that owns zero or more players. Players hold the
//! foreign key; deleting a team removes its players.

mod entity;
mod repository;
mod validation;
mod view;

pub use entity::{TeamEntity, TeamId};
pub use repository::TeamRepository;
#[cfg(test)]
pub use repository::MockTeamRepository;
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};
pub use view::{TeamDto, TeamSummaryDto, TeamUpdateDto};
