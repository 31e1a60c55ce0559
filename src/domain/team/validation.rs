//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID must be a positive integer, got '{0}'")]
    InvalidId(String),

    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Team {0} cannot be negative")]
    NegativeRecord(&'static str),
}

pub(crate) const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team ID path segment
pub fn validate_team_id(id: &str) -> Result<i64, TeamValidationError> {
    match id.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(TeamValidationError::InvalidId(id.to_string())),
    }
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a win or loss count
pub fn validate_record(field: &'static str, value: Option<i32>) -> Result<(), TeamValidationError> {
    match value {
        Some(v) if v < 0 => Err(TeamValidationError::NegativeRecord(field)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_id() {
        assert_eq!(validate_team_id("1"), Ok(1));
        assert_eq!(validate_team_id("9999"), Ok(9999));
        assert_eq!(validate_team_id(" 42 "), Ok(42));
    }

    #[test]
    fn test_invalid_team_id() {
        assert_eq!(
            validate_team_id("cowboys"),
            Err(TeamValidationError::InvalidId("cowboys".to_string()))
        );
        assert!(validate_team_id("0").is_err());
        assert!(validate_team_id("-3").is_err());
        assert!(validate_team_id("").is_err());
    }

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("Cowboys").is_ok());
        assert!(validate_team_name("Green Bay Packers").is_ok());
    }

    #[test]
    fn test_empty_team_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
        assert_eq!(validate_team_name("   "), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&long_name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_record_validation() {
        assert!(validate_record("wins", Some(10)).is_ok());
        assert!(validate_record("wins", None).is_ok());
        assert_eq!(
            validate_record("losses", Some(-1)),
            Err(TeamValidationError::NegativeRecord("losses"))
        );
    }
}
