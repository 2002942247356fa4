//! HTTP Handlers
//!
//! Each handler runs one use case and answers with a [`Directive`].

use axum::extract::{Extension, Form, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::OptionExt, kind::ErrorKind};
use std::sync::Arc;

use crate::application::config::TodoConfig;
use crate::application::{
    ClearDoneUseCase, CreateTodoInput, CreateTodoUseCase, CurrentAccount, ListTodosUseCase,
    RegisterInput, RegisterUseCase, SignInInput, SignInUseCase, SignOutUseCase, ToggleTodoUseCase,
};
use crate::domain::repository::TodoStore;
use crate::error::TodoResult;
use crate::presentation::directive::Directive;
use crate::presentation::dto::{CreateTodoForm, CredentialsForm, ToggleForm};
use crate::presentation::middleware::SessionStatus;
use crate::presentation::view;

/// Shared state for to-do handlers
#[derive(Clone)]
pub struct TodoAppState<R>
where
    R: TodoStore,
{
    pub repo: Arc<R>,
    pub config: Arc<TodoConfig>,
}

// ============================================================================
// Pages
// ============================================================================

/// GET /
pub async fn index<R>(
    State(state): State<TodoAppState<R>>,
    Extension(status): Extension<SessionStatus>,
) -> TodoResult<Directive>
where
    R: TodoStore,
{
    let Some(current) = status.current else {
        return Ok(Directive::Redirect("/login"));
    };

    let todos = ListTodosUseCase::new(state.repo.clone())
        .execute(&current.account_id)
        .await?;

    Ok(Directive::Page(view::render_index(
        current.username.as_str(),
        &todos,
    )))
}

/// GET /login
pub async fn login_page() -> Directive {
    Directive::Page(view::render_login())
}

// ============================================================================
// Sign In / Register / Sign Out
// ============================================================================

/// POST /sign-in
pub async fn sign_in<R>(
    State(state): State<TodoAppState<R>>,
    headers: HeaderMap,
    Form(form): Form<CredentialsForm>,
) -> TodoResult<Response>
where
    R: TodoStore,
{
    let previous = extract_session_cookie(&headers, &state.config);

    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(
            SignInInput {
                username: form.username,
                password: form.password,
            },
            previous.as_deref(),
        )
        .await?;

    session_established(&state.config, &output.session_token)
}

/// POST /register
pub async fn register<R>(
    State(state): State<TodoAppState<R>>,
    headers: HeaderMap,
    Form(form): Form<CredentialsForm>,
) -> TodoResult<Response>
where
    R: TodoStore,
{
    let previous = extract_session_cookie(&headers, &state.config);

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(
            RegisterInput {
                username: form.username,
                password: form.password,
            },
            previous.as_deref(),
        )
        .await?;

    session_established(&state.config, &output.session_token)
}

/// POST /sign-out
pub async fn sign_out<R>(
    State(state): State<TodoAppState<R>>,
    headers: HeaderMap,
) -> TodoResult<Response>
where
    R: TodoStore,
{
    let token = extract_session_cookie(&headers, &state.config);

    let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(token.as_deref()).await?;

    let cookie = cookie_header(state.config.session_cookie().delete_cookie_header())?;
    Ok((
        [(header::SET_COOKIE, cookie)],
        Directive::ClientRedirect("/login"),
    )
        .into_response())
}

// ============================================================================
// To-do List (requires a session)
// ============================================================================

/// POST /create_todo
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    current: CurrentAccount,
    Form(form): Form<CreateTodoForm>,
) -> TodoResult<Directive>
where
    R: TodoStore,
{
    let todos = CreateTodoUseCase::new(state.repo.clone())
        .execute(
            &current.account_id,
            CreateTodoInput {
                description: form.description,
            },
        )
        .await?;

    Ok(Directive::Fragment(view::render_todo_container(&todos)))
}

/// PATCH /toggleCheck
pub async fn toggle_check<R>(
    State(state): State<TodoAppState<R>>,
    current: CurrentAccount,
    Form(form): Form<ToggleForm>,
) -> TodoResult<Directive>
where
    R: TodoStore,
{
    let target = form.target()?;

    ToggleTodoUseCase::new(state.repo.clone())
        .execute(&current.account_id, target)
        .await?;

    Ok(Directive::Empty)
}

/// POST /clearDone
pub async fn clear_done<R>(
    State(state): State<TodoAppState<R>>,
    current: CurrentAccount,
) -> TodoResult<Directive>
where
    R: TodoStore,
{
    let output = ClearDoneUseCase::new(state.repo.clone())
        .execute(&current.account_id)
        .await?;

    Ok(Directive::Fragment(view::render_todo_container(
        &output.todos,
    )))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, config: &TodoConfig) -> Option<String> {
    platform::cookie::extract_cookie(headers, &config.session_cookie_name)
}

fn cookie_header(value: Option<HeaderValue>) -> TodoResult<HeaderValue> {
    Ok(value.ok_or_app_err(
        ErrorKind::InternalServerError,
        "Session cookie is not a valid header",
    )?)
}

/// Set the session cookie and send the client home
fn session_established(config: &TodoConfig, token: &str) -> TodoResult<Response> {
    let cookie = cookie_header(config.session_cookie().set_cookie_header(token))?;
    Ok(([(header::SET_COOKIE, cookie)], Directive::ClientRedirect("/")).into_response())
}
