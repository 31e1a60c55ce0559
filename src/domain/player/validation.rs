//! Player validation

use thiserror::Error;

/// Errors that can occur during player validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlayerValidationError {
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Player name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Player position cannot exceed {0} characters")]
    PositionTooLong(usize),

    #[error("Player must reference a team")]
    MissingTeamId,
}

const MAX_PLAYER_NAME_LENGTH: usize = 100;
const MAX_POSITION_LENGTH: usize = 100;

/// Validate a player name
pub fn validate_player_name(name: &str) -> Result<(), PlayerValidationError> {
    if name.trim().is_empty() {
        return Err(PlayerValidationError::EmptyName);
    }

    if name.chars().count() > MAX_PLAYER_NAME_LENGTH {
        return Err(PlayerValidationError::NameTooLong(MAX_PLAYER_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an optional playing position
pub fn validate_position(position: Option<&str>) -> Result<(), PlayerValidationError> {
    match position {
        Some(p) if p.chars().count() > MAX_POSITION_LENGTH => {
            Err(PlayerValidationError::PositionTooLong(MAX_POSITION_LENGTH))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_player_name() {
        assert!(validate_player_name("Dak-Prescott").is_ok());
        assert!(validate_player_name("CeeDee Lamb").is_ok());
    }

    #[test]
    fn test_empty_player_name() {
        assert_eq!(validate_player_name(""), Err(PlayerValidationError::EmptyName));
        assert_eq!(validate_player_name(" "), Err(PlayerValidationError::EmptyName));
    }

    #[test]
    fn test_player_name_too_long() {
        assert_eq!(
            validate_player_name(&"x".repeat(101)),
            Err(PlayerValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_position() {
        assert!(validate_position(None).is_ok());
        assert!(validate_position(Some("Quarterback")).is_ok());
        assert_eq!(
            validate_position(Some(&"q".repeat(101))),
            Err(PlayerValidationError::PositionTooLong(100))
        );
    }
}
