//! Application Error
//!
//! [`AppError`] is the workspace-wide error currency: a kind (which fixes
//! the HTTP status), a message safe to show a user, an optional hint on
//! what to do next, and the underlying cause for logs.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Message = Cow<'static, str>;

/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "To-do item not found")
///     .with_action("Reload the page.");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.user_text(), "To-do item not found. Reload the page.");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Message,
    action: Option<Message>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Message>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    #[inline]
    pub fn internal(message: impl Into<Message>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Hint shown after the message
    #[inline]
    pub fn with_action(mut self, action: impl Into<Message>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attach the underlying cause; it is logged, never shown
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Text for the response body
    pub fn user_text(&self) -> String {
        match &self.action {
            Some(action) => format!("{}. {}", self.message, action),
            None => self.message.to_string(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Extension traits
// ============================================================================

/// Turn a foreign `Result` into an [`AppResult`], keeping the cause
pub trait ResultExt<T> {
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Message>) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Message>) -> AppResult<T> {
        self.map_err(|e| AppError::new(kind, message).with_source(e))
    }
}

/// Turn an `Option` into an [`AppResult`]
pub trait OptionExt<T> {
    fn ok_or_app_err(self, kind: ErrorKind, message: impl Into<Message>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_app_err(self, kind: ErrorKind, message: impl Into<Message>) -> AppResult<T> {
        self.ok_or_else(|| AppError::new(kind, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Conflict, "Username is already taken");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message, "Username is already taken");
        assert!(err.action.is_none());
        assert_eq!(err.user_text(), "Username is already taken");
    }

    #[test]
    fn test_action_is_part_of_user_text() {
        let err = AppError::new(ErrorKind::NotFound, "To-do item not found")
            .with_action("Reload the page.");
        assert_eq!(err.user_text(), "To-do item not found. Reload the page.");
        assert_eq!(err.to_string(), "[Not Found] To-do item not found");
    }

    #[test]
    fn test_source_is_kept_and_displayed() {
        let parse_err = "x".parse::<u32>().unwrap_err();
        let err = AppError::internal("Bad setting").with_source(parse_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("[Internal Server Error] Bad setting: "));
        assert!(!err.user_text().contains("invalid digit"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<u32, std::num::ParseIntError> = "abc".parse();
        let err = result
            .map_app_err(ErrorKind::UnprocessableEntity, "Bad index")
            .unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        assert_eq!(
            none.ok_or_app_err(ErrorKind::NotFound, "missing")
                .unwrap_err()
                .status_code(),
            404
        );
        assert_eq!(Some(42).ok_or_app_err(ErrorKind::NotFound, "missing").unwrap(), 42);
    }
}
