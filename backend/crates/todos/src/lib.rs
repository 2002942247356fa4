//! To-do List Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Storage implementations
//! - `presentation/` - HTTP handlers, forms, views, router
//!
//! ## Features
//! - Account registration and sign-in with username + password
//! - One ordered to-do list per account (create, toggle, clear completed)
//! - Server-rendered pages and fragments for an htmx front end
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Per-client sessions referenced by an HMAC-signed cookie token
//! - Sliding session expiry; expired sessions are swept in the background

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TodoConfig;
pub use error::{TodoError, TodoResult};
pub use infra::memory::MemoryStore;
pub use presentation::router::{todo_router, todo_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
