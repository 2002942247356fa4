//! Value Object Module

pub mod description;
pub mod password;
pub mod username;
