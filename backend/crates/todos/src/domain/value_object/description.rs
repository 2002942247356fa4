//! To-do Description Value Object

use derive_more::Display;
use thiserror::Error;

pub const DESCRIPTION_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("Description cannot be empty")]
    Empty,

    #[error("Description is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },
}

/// Trimmed, non-empty item text
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Description(String);

impl Description {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DescriptionError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DescriptionError::Empty);
        }

        let length = trimmed.chars().count();
        if length > DESCRIPTION_MAX_LENGTH {
            return Err(DescriptionError::TooLong {
                length,
                max: DESCRIPTION_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        assert_eq!(Description::new("  buy milk ").unwrap().as_str(), "buy milk");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Description::new(" \t"), Err(DescriptionError::Empty));
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(Description::new("é".repeat(DESCRIPTION_MAX_LENGTH)).is_ok());
        assert!(matches!(
            Description::new("é".repeat(DESCRIPTION_MAX_LENGTH + 1)),
            Err(DescriptionError::TooLong { .. })
        ));
    }
}
