//! Password Value Objects
//!
//! Domain wrappers over `platform::password`. Policy and hashing failures
//! are translated into [`TodoError`] variants.

use platform::password::{
    ClearTextPassword, HashedPassword, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PasswordPolicy,
};
use std::fmt;

use crate::error::{TodoError, TodoResult};

/// Password as typed by the user, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a password chosen at registration
    pub fn new(raw: String, policy: &PasswordPolicy) -> TodoResult<Self> {
        ClearTextPassword::new(raw, policy)
            .map(Self)
            .map_err(|e| TodoError::InvalidPassword(e.to_string()))
    }

    /// Wrap a sign-in attempt
    ///
    /// Only structural rules apply, with room for anything `policy` accepts
    /// at registration; a password that cannot be valid simply fails
    /// verification later.
    pub fn for_verification(raw: String, policy: &PasswordPolicy) -> TodoResult<Self> {
        let lenient = PasswordPolicy {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: policy.max_length.max(MAX_PASSWORD_LENGTH),
            reject_common_patterns: false,
        };
        Self::new(raw, &lenient).map_err(|_| TodoError::PasswordMismatch)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Salted Argon2id hash of an account's password
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> TodoResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_err(|e| TodoError::Internal(e.to_string()))
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> TodoResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|e| TodoError::Internal(e.to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    /// True if the hash was made with other parameters than the current ones
    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_policy_applies() {
        let strict = PasswordPolicy::strict();
        assert!(matches!(
            RawPassword::new("pw1".to_string(), &strict),
            Err(TodoError::InvalidPassword(_))
        ));
        assert!(RawPassword::new("pw1".to_string(), &PasswordPolicy::default()).is_ok());
    }

    #[test]
    fn test_unverifiable_attempt_is_mismatch() {
        assert!(matches!(
            RawPassword::for_verification("   ".to_string(), &PasswordPolicy::default()),
            Err(TodoError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_verification_allows_configured_length() {
        let roomy = PasswordPolicy {
            max_length: 256,
            ..PasswordPolicy::default()
        };
        let long = "a".repeat(200);
        assert!(RawPassword::new(long.clone(), &roomy).is_ok());
        assert!(RawPassword::for_verification(long.clone(), &roomy).is_ok());
        assert!(RawPassword::for_verification(long, &PasswordPolicy::default()).is_err());

        // A strict registration policy does not block signing in
        assert!(RawPassword::for_verification("pw1".to_string(), &PasswordPolicy::strict()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("pw1".to_string(), &PasswordPolicy::default()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&raw, None));

        let wrong =
            RawPassword::for_verification("pw2".to_string(), &PasswordPolicy::default()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_phc_roundtrip() {
        let raw = RawPassword::new("pw1".to_string(), &PasswordPolicy::default()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();
        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, Some(b"pepper")));
        assert!(UserPassword::from_phc_string("garbage").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("hunter2".to_string(), &PasswordPolicy::default()).unwrap();
        assert!(!format!("{raw:?}").contains("hunter2"));
    }
}
