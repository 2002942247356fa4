//! Response Directives
//!
//! Every handler answers with one of a small set of directives. The htmx
//! client interprets `HX-Redirect` (navigate the whole page), and
//! `HX-Retarget` with `HX-Reswap` (swap the body into another element,
//! whatever swap style the requesting element declares).

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::presentation::view::escape_html;

pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");
pub const HX_RETARGET: HeaderName = HeaderName::from_static("hx-retarget");
pub const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");

/// Error region of the username input on the login page
pub const USERNAME_ERROR_TARGET: &str = "#username-error-dialog";
/// Error region of the password input on the login page
pub const PASSWORD_ERROR_TARGET: &str = "#password-error-dialog";
/// Error region of the new to-do input on the home page
pub const DESCRIPTION_ERROR_TARGET: &str = "#description-error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Full HTML document
    Page(String),
    /// HTML fragment swapped into the requesting element
    Fragment(String),
    /// HTTP 303 redirect
    Redirect(&'static str),
    /// Empty body with `HX-Redirect`
    ClientRedirect(&'static str),
    /// Empty 200 acknowledgement
    Empty,
    /// Escaped message swapped into `target` instead of the requesting element
    ErrorFragment {
        target: &'static str,
        message: String,
    },
}

impl IntoResponse for Directive {
    fn into_response(self) -> Response {
        match self {
            Directive::Page(html) | Directive::Fragment(html) => Html(html).into_response(),
            Directive::Redirect(path) => Redirect::to(path).into_response(),
            Directive::ClientRedirect(path) => {
                (StatusCode::OK, [(HX_REDIRECT, HeaderValue::from_static(path))]).into_response()
            }
            Directive::Empty => StatusCode::OK.into_response(),
            Directive::ErrorFragment { target, message } => (
                StatusCode::OK,
                [
                    (HX_RETARGET, HeaderValue::from_static(target)),
                    (HX_RESWAP, HeaderValue::from_static("innerHTML")),
                    (
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/html; charset=utf-8"),
                    ),
                ],
                escape_html(&message),
            )
                .into_response(),
        }
    }
}
