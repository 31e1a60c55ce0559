//! Player domain module
//!
//! A player belongs to exactly one team and owns the foreign key of that
//! relationship.

mod entity;
mod repository;
mod validation;
mod view;

pub use entity::{PlayerEntity, PlayerId};
pub use repository::PlayerRepository;
#[cfg(test)]
pub use repository::MockPlayerRepository;
pub use validation::{validate_player_name, PlayerValidationError};
pub use view::PlayerDto;
