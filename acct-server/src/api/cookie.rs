//! Cookie plumbing for the anonymous identifier.
//!
//! The anonymous token is caller-owned state: the core only requires
//! that the same value arrives on every request from one client. The
//! cookie is how a browser holds up that contract.

use axum::http::{HeaderMap, header};

/// Cookie carrying the client-generated anonymous token.
pub const ANONYMOUS_COOKIE: &str = "anonymous-user-id";

/// Read a cookie value from the request headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

/// Build the Set-Cookie value for a freshly minted anonymous token:
/// path `/`, long expiry, SameSite=Lax.
pub fn anonymous_set_cookie(value: &str, max_age_secs: i64) -> String {
    format!("{ANONYMOUS_COOKIE}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn given_single_cookie_when_read_then_value_is_returned() {
        let headers = headers_with_cookie("anonymous-user-id=abc-123");

        assert_eq!(
            read_cookie(&headers, ANONYMOUS_COOKIE).as_deref(),
            Some("abc-123")
        );
    }

    #[test]
    fn given_multiple_cookies_when_read_then_only_named_one_matches() {
        let headers = headers_with_cookie("theme=dark; anonymous-user-id=abc-123; lang=en");

        assert_eq!(
            read_cookie(&headers, ANONYMOUS_COOKIE).as_deref(),
            Some("abc-123")
        );
    }

    #[test]
    fn given_missing_or_empty_cookie_when_read_then_none() {
        let headers = headers_with_cookie("theme=dark; anonymous-user-id=");

        assert_eq!(read_cookie(&headers, ANONYMOUS_COOKIE), None);
        assert_eq!(read_cookie(&HeaderMap::new(), ANONYMOUS_COOKIE), None);
    }

    #[test]
    fn given_token_when_set_cookie_built_then_attributes_are_present() {
        let cookie = anonymous_set_cookie("abc-123", 31_536_000);

        assert_eq!(
            cookie,
            "anonymous-user-id=abc-123; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }
}
