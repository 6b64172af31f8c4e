//! Adapters between axum request/response parts and core inputs.

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use teapot_core::origin::Origin;

/// Scheme this demo serves; there is no TLS termination in front of it.
pub const SCHEME: &str = "http";

/// Trust anchor for redirect checks, built from the request `Host` header.
pub fn request_origin(headers: &HeaderMap) -> Option<Origin> {
    let host = headers.get(header::HOST)?.to_str().ok()?;
    Origin::from_host_header(SCHEME, host)
}

/// Value of a named cookie from the `Cookie` header, if present.
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}

/// 302 Found to `location`.
pub fn found(location: &str) -> Response {
    found_with_cookie(location, None)
}

/// 302 Found to `location`, optionally setting a cookie on the way.
pub fn found_with_cookie(location: &str, cookie: Option<&str>) -> Response {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(location) {
        headers.insert(header::LOCATION, value);
    }
    if let Some(cookie) = cookie {
        if let Ok(value) = HeaderValue::from_str(cookie) {
            headers.insert(header::SET_COOKIE, value);
        }
    }
    (StatusCode::FOUND, headers).into_response()
}

/// Minimal HTML escaping for text interpolated into demo pages.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_origin_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:5000"));
        let origin = request_origin(&headers).unwrap();
        assert_eq!(origin.scheme, "http");
        assert_eq!(origin.netloc(), "localhost:5000");
    }

    #[test]
    fn request_origin_missing_host() {
        assert!(request_origin(&HeaderMap::new()).is_none());
    }

    #[test]
    fn get_cookie_picks_named_pair() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("a=1; name=Grey; session=xyz"),
        );
        assert_eq!(get_cookie(&headers, "name"), Some("Grey"));
        assert_eq!(get_cookie(&headers, "session"), Some("xyz"));
        assert_eq!(get_cookie(&headers, "missing"), None);
    }

    #[test]
    fn escape_html_neutralises_markup() {
        assert_eq!(
            escape_html("<script>\"&'"),
            "&lt;script&gt;&quot;&amp;&#x27;"
        );
        assert_eq!(escape_html("Human"), "Human");
    }
}
