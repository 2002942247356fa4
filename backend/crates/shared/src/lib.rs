//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by every crate in the workspace:
//! - Unified application error and result alias
//! - Typed identifiers for accounts, to-do items and sessions
//!
//! Only things whose meaning is stable across the whole application
//! belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
