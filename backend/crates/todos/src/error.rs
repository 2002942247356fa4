//! To-do Error Types
//!
//! Domain error variants that integrate with the unified
//! `kernel::error::AppError` system. Authentication and validation
//! failures are rendered as error fragments aimed at a form's error
//! region; everything else becomes an `AppError` response.

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::directive::{
    DESCRIPTION_ERROR_TARGET, Directive, HX_REDIRECT, PASSWORD_ERROR_TARGET, USERNAME_ERROR_TARGET,
};

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("User not found")]
    UserNotFound,

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Username is already taken")]
    DuplicateUsername,

    /// No valid session for the request
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("To-do item not found")]
    ItemNotFound,

    /// 1-based position outside `1..=len`
    #[error("Item {index} does not exist (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    InvalidUsername(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("{0}")]
    InvalidDescription(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::UserNotFound | TodoError::ItemNotFound => ErrorKind::NotFound,
            TodoError::PasswordMismatch | TodoError::NotAuthenticated => ErrorKind::Unauthorized,
            TodoError::DuplicateUsername => ErrorKind::Conflict,
            TodoError::IndexOutOfRange { .. } | TodoError::InvalidDescription(_) => {
                ErrorKind::UnprocessableEntity
            }
            TodoError::InvalidUsername(_) | TodoError::InvalidPassword(_) => ErrorKind::BadRequest,
            TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Details of internal errors stay in the logs
    pub fn to_app_error(&self) -> AppError {
        match self {
            TodoError::Internal(_) => {
                AppError::internal("Something went wrong").with_action("Please try again.")
            }
            TodoError::ItemNotFound | TodoError::IndexOutOfRange { .. } => {
                AppError::new(self.kind(), self.to_string()).with_action("Reload the page.")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Form region an error message belongs to, if it is shown inline
    pub fn target(&self) -> Option<&'static str> {
        match self {
            TodoError::UserNotFound
            | TodoError::DuplicateUsername
            | TodoError::InvalidUsername(_) => Some(USERNAME_ERROR_TARGET),
            TodoError::PasswordMismatch | TodoError::InvalidPassword(_) => {
                Some(PASSWORD_ERROR_TARGET)
            }
            TodoError::InvalidDescription(_) => Some(DESCRIPTION_ERROR_TARGET),
            _ => None,
        }
    }

    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "To-do internal error");
            return;
        }

        match self {
            TodoError::UserNotFound | TodoError::PasswordMismatch => {
                tracing::warn!(error = %self, "Failed sign-in attempt");
            }
            _ => {
                tracing::debug!(error = %self, "To-do request rejected");
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();

        if let TodoError::NotAuthenticated = self {
            return (
                StatusCode::UNAUTHORIZED,
                [(HX_REDIRECT, HeaderValue::from_static("/login"))],
            )
                .into_response();
        }

        match self.target() {
            Some(target) => Directive::ErrorFragment {
                target,
                message: self.to_string(),
            }
            .into_response(),
            None => self.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for TodoError {
    fn from(err: AppError) -> Self {
        TodoError::Internal(err.to_string())
    }
}
