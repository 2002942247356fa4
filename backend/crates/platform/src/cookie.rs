//! Cookie Management Infrastructure
//!
//! Building `Set-Cookie` values and reading cookies from request headers.

use http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attributes shared by the set and delete forms
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build a `Set-Cookie` value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];
        self.push_attributes(&mut parts);
        if let Some(max_age) = self.max_age_secs {
            parts.push(format!("Max-Age={max_age}"));
        }
        parts.join("; ")
    }

    /// Build a `Set-Cookie` value that expires the cookie immediately
    pub fn build_delete_cookie(&self) -> String {
        let mut parts = vec![format!("{}=", self.name)];
        self.push_attributes(&mut parts);
        parts.push("Max-Age=0".to_string());
        parts.push("Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string());
        parts.join("; ")
    }

    fn push_attributes(&self, parts: &mut Vec<String>) {
        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
    }

    /// `Set-Cookie` header value; `None` if `value` contains bytes not allowed in a header
    pub fn set_cookie_header(&self, value: &str) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.build_set_cookie(value)).ok()
    }

    /// `Set-Cookie` header value that clears the cookie
    pub fn delete_cookie_header(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.build_delete_cookie()).ok()
    }
}

/// Extract a cookie value from headers
///
/// All `Cookie` headers are searched; the first match wins.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CookieConfig {
        CookieConfig {
            name: "todo_session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: Some(3600),
        }
    }

    #[test]
    fn test_build_set_cookie() {
        let cookie = config().build_set_cookie("value123");
        assert!(cookie.starts_with("todo_session=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_build_set_cookie_insecure() {
        let config = CookieConfig {
            secure: false,
            max_age_secs: None,
            ..config()
        };
        let cookie = config.build_set_cookie("v");
        assert!(!cookie.contains("Secure"));
        assert!(!cookie.contains("Max-Age"));
    }

    #[test]
    fn test_build_delete_cookie() {
        let cookie = config().build_delete_cookie();
        assert!(cookie.starts_with("todo_session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(!cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("SameSite=Strict"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; todo_session=abc.123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "todo_session"),
            Some("abc.123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("foo=bar"));
        headers.append(header::COOKIE, HeaderValue::from_static("todo_session=t"));

        assert_eq!(
            extract_cookie(&headers, "todo_session"),
            Some("t".to_string())
        );
    }

    #[test]
    fn test_header_values() {
        assert!(config().set_cookie_header("ok").is_some());
        assert!(config().set_cookie_header("bad\nvalue").is_none());
        assert!(config().delete_cookie_header().is_some());
    }
}
