//! Presentation Layer
//!
//! HTTP handlers, form DTOs, views, router, and middleware.

pub mod directive;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod view;

pub use directive::Directive;
pub use handlers::TodoAppState;
pub use middleware::{SessionStatus, check_session};
pub use router::{todo_router, todo_router_generic};
