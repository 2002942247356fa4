//! Username Value Object
//!
//! The unique key of an account and the name shown on the home page.
//!
//! ## Rules
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to 32 characters after normalization
//! - No whitespace or control characters inside
//! - Case is preserved and significant

use derive_more::Display;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const USERNAME_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Username cannot contain spaces")]
    ContainsWhitespace,

    #[error("Username contains invalid characters")]
    InvalidCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Username(String);

impl Username {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(UsernameError::InvalidCharacter);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UsernameError::ContainsWhitespace);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
