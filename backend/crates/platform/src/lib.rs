//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random keys, HMAC-signed tokens)
//! - Password hashing (Argon2id, PHC strings)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
