//! Session Middleware
//!
//! Resolves the session cookie once per request and stores the result in
//! request extensions for handlers and extractors.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::{CheckSessionUseCase, CurrentAccount};
use crate::domain::repository::TodoStore;
use crate::error::TodoError;
use crate::presentation::handlers::TodoAppState;

/// Session status stored in request extensions
#[derive(Debug, Clone, Default)]
pub struct SessionStatus {
    pub current: Option<CurrentAccount>,
}

/// Middleware that checks the session but doesn't require it
///
/// A signed-in response that sets no cookie of its own gets a refreshed
/// session cookie, so the browser keeps it as long as the server does.
pub async fn check_session<R>(
    State(state): State<TodoAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: TodoStore,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let current = match token.as_deref() {
        Some(token) => {
            let use_case =
                CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
            match use_case.execute(token).await {
                Ok(current) => Some(current),
                Err(TodoError::NotAuthenticated) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "Session check failed");
                    None
                }
            }
        }
        None => None,
    };

    let refresh = current.as_ref().and(token);
    req.extensions_mut().insert(SessionStatus { current });

    let mut response = next.run(req).await;

    if let Some(token) = refresh {
        if !response.headers().contains_key(header::SET_COOKIE) {
            if let Some(cookie) = state.config.session_cookie().set_cookie_header(&token) {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
        }
    }

    response
}

/// Handlers that take a `CurrentAccount` only run for signed-in clients
impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionStatus>()
            .and_then(|status| status.current.clone())
            .ok_or(TodoError::NotAuthenticated)
    }
}
