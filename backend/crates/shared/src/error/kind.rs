//! Error Kind
//!
//! The small set of failure classes the application distinguishes. Each
//! class maps to exactly one HTTP status.

/// Failure class of an [`AppError`](super::app_error::AppError)
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Conflict.status_code(), 409);
/// assert_eq!(ErrorKind::Conflict.reason(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed input
    BadRequest,
    /// No session, or credentials that do not check out
    Unauthorized,
    NotFound,
    /// The request clashes with stored state (e.g. a taken username)
    Conflict,
    /// Well-formed input that names something impossible
    UnprocessableEntity,
    InternalServerError,
}

impl ErrorKind {
    const fn parts(&self) -> (u16, &'static str) {
        match self {
            ErrorKind::BadRequest => (400, "Bad Request"),
            ErrorKind::Unauthorized => (401, "Unauthorized"),
            ErrorKind::NotFound => (404, "Not Found"),
            ErrorKind::Conflict => (409, "Conflict"),
            ErrorKind::UnprocessableEntity => (422, "Unprocessable Entity"),
            ErrorKind::InternalServerError => (500, "Internal Server Error"),
        }
    }

    #[inline]
    pub const fn status_code(&self) -> u16 {
        self.parts().0
    }

    /// Standard reason phrase of the status
    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.parts().1
    }

    /// 5xx; these deserve an error-level log line
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}
