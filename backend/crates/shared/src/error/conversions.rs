//! Error conversions
//!
//! The axum response rendering.

use super::app_error::AppError;

/// Plain-text body; htmx swaps it into the target element as-is.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, self.user_text()).into_response()
    }
}
