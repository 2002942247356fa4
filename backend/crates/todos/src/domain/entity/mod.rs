//! Entity Module

pub mod account;
pub mod session;
pub mod todo;
