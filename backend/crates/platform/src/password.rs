//! Password Hashing and Verification
//!
//! - Argon2id hashing with a fresh random salt per hash
//! - PHC string output (algorithm, parameters and salt travel with the hash)
//! - Zeroization of clear-text passwords
//! - Constant-time verification
//! - Configurable length policy, optional weak-pattern rejection

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Default minimum password length (in code points)
pub const MIN_PASSWORD_LENGTH: usize = 1;

/// Maximum password length (in code points)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Policy
// ============================================================================

/// Rules a clear-text password must satisfy before it is hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    /// Reject dictionary words, keyboard walks and digit runs
    pub reject_common_patterns: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            reject_common_patterns: false,
        }
    }
}

impl PasswordPolicy {
    /// NIST SP 800-63B style policy: at least 8 characters, no common patterns
    pub fn strict() -> Self {
        Self {
            min_length: 8,
            max_length: MAX_PASSWORD_LENGTH,
            reject_common_patterns: true,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and wrap a password
    ///
    /// Unicode is normalized using NFKC before validation; lengths are
    /// counted in code points, not bytes.
    pub fn new(raw: String, policy: &PasswordPolicy) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        let password = Self(normalized);

        if password.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = password.0.chars().count();
        if char_count < policy.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: policy.min_length,
                actual: char_count,
            });
        }
        if char_count > policy.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: policy.max_length,
                actual: char_count,
            });
        }

        if password
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if policy.reject_common_patterns && is_common_pattern(&password.0) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(password)
    }

    /// Create without validation (for testing or trusted input)
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Vec<u8> {
        let mut bytes = self.0.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash the password using Argon2id with a fresh salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let mut password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(&mut OsRng);

        let result = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        password_bytes.zeroize();
        result
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format
///
/// The string carries algorithm, version, parameters and salt, so it is
/// sufficient on its own to verify a later attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// `pepper` must match the one used during hashing. Returns `false` for
    /// a mismatch and for an unparseable hash.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        let mut password_bytes = password.peppered(pepper);
        let valid = Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok();
        password_bytes.zeroize();
        valid
    }

    /// True unless the hash is Argon2id with the current version and cost
    /// parameters
    pub fn needs_rehash(&self) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return true;
        };
        if parsed.algorithm != Algorithm::Argon2id.ident()
            || parsed.version != Some(Version::V0x13 as u32)
        {
            return true;
        }
        let Ok(params) = Params::try_from(&parsed) else {
            return true;
        };

        let current = Params::default();
        params.m_cost() != current.m_cost()
            || params.t_cost() != current.t_cost()
            || params.p_cost() != current.p_cost()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if lower.chars().count() >= 3 && chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx"];
    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdefgh",
        "letmein",
        "welcome",
        "admin123",
        "iloveyou",
        "sunshine",
        "trustno1",
    ];
    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Whole string is a run of 4+ ascending or descending digits
fn is_sequential_numbers(s: &str) -> bool {
    let Some(digits) = s
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    if digits.len() < 4 {
        return false;
    }

    let ascending = digits.windows(2).all(|w| w[1] == (w[0] + 1) % 10);
    let descending = digits.windows(2).all(|w| w[0] == (w[1] + 1) % 10);
    ascending || descending
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> PasswordPolicy {
        PasswordPolicy::default()
    }

    #[test]
    fn test_short_password_allowed_by_default() {
        assert!(ClearTextPassword::new("pw1".to_string(), &default_policy()).is_ok());
    }

    #[test]
    fn test_password_too_short_under_strict_policy() {
        let result = ClearTextPassword::new("short".to_string(), &PasswordPolicy::strict());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password, &default_policy());
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        for raw in ["", "   ", "\t\n"] {
            let result = ClearTextPassword::new(raw.to_string(), &default_policy());
            assert!(matches!(
                result,
                Err(PasswordPolicyError::EmptyOrWhitespace)
            ));
        }
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}def".to_string(), &default_policy());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_common_patterns_only_rejected_when_enabled() {
        let strict = PasswordPolicy::strict();
        for raw in ["password123", "qwertyuiop", "12345678", "98765432", "aaaaaaaa"] {
            let result = ClearTextPassword::new(raw.to_string(), &strict);
            assert!(
                matches!(result, Err(PasswordPolicyError::CommonPattern)),
                "{raw} should be rejected"
            );
        }

        assert!(ClearTextPassword::new("password123".to_string(), &default_policy()).is_ok());
        assert!(ClearTextPassword::new("MySecure#Pass2024!".to_string(), &strict).is_ok());
    }

    #[test]
    fn test_nfkc_normalization_before_hashing() {
        // Full-width and half-width forms normalize to the same password
        let full_width = ClearTextPassword::new("ｐａｓｓ".to_string(), &default_policy()).unwrap();
        let ascii = ClearTextPassword::new("pass".to_string(), &default_policy()).unwrap();

        let hashed = full_width.hash(None).unwrap();
        assert!(hashed.verify(&ascii, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("pw1".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::new_unchecked("pw2".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = ClearTextPassword::new_unchecked("pw1".to_string());
        let first = password.hash(None).unwrap();
        let second = password.hash(None).unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&password, None));
        assert!(second.verify(&password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(!hashed.needs_rehash());

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_weaker_parameters_need_rehash() {
        let weak = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(1024, 1, 1, None).unwrap(),
        );
        let salt = SaltString::generate(&mut OsRng);
        let phc = weak.hash_password(b"pw1", &salt).unwrap().to_string();
        let hashed = HashedPassword::from_phc_string(phc).unwrap();

        assert!(hashed.needs_rehash());
        // Verification reads the parameters from the hash itself
        let password = ClearTextPassword::new_unchecked("pw1".to_string());
        assert!(hashed.verify(&password, None));
    }

    #[test]
    fn test_other_algorithm_needs_rehash() {
        let argon2i = Argon2::new(Algorithm::Argon2i, Version::V0x13, Params::default());
        let salt = SaltString::generate(&mut OsRng);
        let phc = argon2i.hash_password(b"pw1", &salt).unwrap().to_string();
        assert!(HashedPassword::from_phc_string(phc).unwrap().needs_rehash());
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
