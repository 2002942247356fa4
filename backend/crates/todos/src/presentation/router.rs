//! To-do Router

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::application::config::TodoConfig;
use crate::domain::repository::TodoStore;
use crate::infra::memory::MemoryStore;
use crate::presentation::handlers::{self, TodoAppState};
use crate::presentation::middleware::check_session;

/// Create the to-do router with the in-memory store
pub fn todo_router(store: MemoryStore, config: TodoConfig) -> Router {
    todo_router_generic(store, config)
}

/// Create a generic to-do router for any store implementation
pub fn todo_router_generic<R>(repo: R, config: TodoConfig) -> Router
where
    R: TodoStore,
{
    let state = TodoAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::index::<R>))
        .route("/login", get(handlers::login_page))
        .route("/sign-in", post(handlers::sign_in::<R>))
        .route("/sign-out", post(handlers::sign_out::<R>))
        .route("/register", post(handlers::register::<R>))
        .route("/create_todo", post(handlers::create_todo::<R>))
        .route("/toggleCheck", patch(handlers::toggle_check::<R>))
        .route("/clearDone", post(handlers::clear_done::<R>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            check_session::<R>,
        ))
        .with_state(state)
}
