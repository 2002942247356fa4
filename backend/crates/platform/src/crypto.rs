//! Cryptographic Utilities
//!
//! Random keys and HMAC-SHA256 signed tokens.
//!
//! A signed token has the form `<payload>.<base64url(HMAC-SHA256(key, payload))>`.
//! The payload itself must not contain a `.`.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is not `<payload>.<signature>`
    #[error("Malformed token")]
    Malformed,

    /// Signature is not valid Base64
    #[error("Token signature is not valid base64")]
    InvalidEncoding,

    /// Signature does not match the payload
    #[error("Token signature mismatch")]
    SignatureMismatch,
}

/// Generate a random 32-byte key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Sign a payload, producing `<payload>.<signature>`
pub fn sign_token(key: &[u8], payload: &str) -> String {
    let signature = hmac_sha256(key, payload.as_bytes());
    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a signed token and return its payload
///
/// The signature comparison is constant-time.
pub fn verify_token<'a>(key: &[u8], token: &'a str) -> Result<&'a str, TokenError> {
    let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if payload.is_empty() || signature_b64.contains('.') {
        return Err(TokenError::Malformed);
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::InvalidEncoding)?;

    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::SignatureMismatch)?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_key_not_all_zeros() {
        let key = random_key();
        assert!(key.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_hmac_sha256_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_sign_and_verify_token() {
        let key = [7u8; 32];
        let token = sign_token(&key, "session-123");
        assert!(token.starts_with("session-123."));
        assert_eq!(verify_token(&key, &token), Ok("session-123"));
    }

    #[test]
    fn test_verify_token_rejects_tampering() {
        let key = [7u8; 32];
        let token = sign_token(&key, "session-123");
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("session-456.{signature}");
        assert_eq!(
            verify_token(&key, &forged),
            Err(TokenError::SignatureMismatch)
        );

        let other_key = [8u8; 32];
        assert_eq!(
            verify_token(&other_key, &token),
            Err(TokenError::SignatureMismatch)
        );
    }

    #[test]
    fn test_verify_token_malformed() {
        let key = [7u8; 32];
        assert_eq!(verify_token(&key, "no-dot"), Err(TokenError::Malformed));
        assert_eq!(verify_token(&key, ".sig"), Err(TokenError::Malformed));
        assert_eq!(verify_token(&key, "a.b.c"), Err(TokenError::Malformed));
        assert_eq!(
            verify_token(&key, "payload.!!!"),
            Err(TokenError::InvalidEncoding)
        );
    }
}
