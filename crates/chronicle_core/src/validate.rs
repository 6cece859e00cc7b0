//! User-input validation for session metadata.
//!
//! # Responsibility
//! - Judge candidate session numbers before they are committed to a
//!   session, so form UIs can give live feedback.
//!
//! # Invariants
//! - Pure: no session is consulted or mutated.
//! - Empty input is acceptable and means "leave the number unset".

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Checks that `input` is an acceptable session number.
///
/// Accepts the empty string (leave unset) or a base-10 integer `>= 0`.
/// Decimals, thousands separators, and negative values are rejected.
pub fn validate_session_number(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Ok(());
    }

    let number: i64 = input
        .parse()
        .map_err(|_| ValidationError::NotANumber(input.to_string()))?;

    if number < 0 {
        return Err(ValidationError::Negative(number));
    }

    Ok(())
}

/// Error for rejected session-number input.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Input does not parse as a base-10 integer.
    NotANumber(String),
    /// Input parses but is below zero.
    Negative(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(input) => {
                write!(f, "`{input}` is not a valid session number")
            }
            Self::Negative(number) => {
                write!(f, "session numbers cannot be less than 0, got {number}")
            }
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{validate_session_number, ValidationError};

    #[test]
    fn reports_the_rejected_input() {
        let err = validate_session_number("nan").unwrap_err();
        assert_eq!(err, ValidationError::NotANumber("nan".to_string()));

        let err = validate_session_number("-7").unwrap_err();
        assert_eq!(err, ValidationError::Negative(-7));
    }

    #[test]
    fn accepts_numbers_too_large_for_any_real_campaign() {
        assert!(validate_session_number("9007199254740993").is_ok());
    }

    #[test]
    fn rejects_whitespace_padding() {
        assert!(validate_session_number(" 5").is_err());
        assert!(validate_session_number("5 ").is_err());
    }
}
