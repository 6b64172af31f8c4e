//! Open-redirect safety: validate untrusted redirect targets against the
//! request origin before honoring them.
//!
//! Targets come from the `next` query parameter or the `Referer` header, both
//! caller-controlled. A target is only honored if, once resolved against the
//! origin the way a browser resolves a link, it is still an http(s) URL on
//! the same network location. Anything else falls through to the caller's
//! default destination; malformed input is rejected, never an error.

use url::Url;

use crate::origin::Origin;

/// True iff `target`, resolved against `origin`, stays on `origin`'s
/// network location with an http or https scheme.
///
/// Purely relative targets always pass (they cannot leave the origin).
/// Absent, empty, or unparseable targets fail.
pub fn is_safe_target(origin: &Origin, target: Option<&str>) -> bool {
    let Some(target) = target else {
        return false;
    };
    if target.is_empty() {
        return false;
    }

    let Ok(base) = Url::parse(&origin.base_url()) else {
        return false;
    };
    let Ok(resolved) = base.join(target) else {
        return false;
    };

    if !matches!(resolved.scheme(), "http" | "https") {
        return false;
    }

    resolved.host_str() == Some(origin.host.as_str()) && resolved.port() == origin.port
}

/// Pick the first candidate that passes [`is_safe_target`], in order; when
/// none does, return `default`. Absent and empty candidates are skipped.
pub fn resolve_redirect<'a>(
    origin: &Origin,
    candidates: &[Option<&'a str>],
    default: &'a str,
) -> &'a str {
    for candidate in candidates.iter().copied().flatten() {
        if is_safe_target(origin, Some(candidate)) {
            tracing::debug!(candidate, "redirect target accepted");
            return candidate;
        }
        tracing::debug!(candidate, "redirect target rejected");
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(url: &str) -> Origin {
        Origin::from_url(url).unwrap()
    }

    #[test]
    fn relative_paths_are_safe() {
        let o = origin("http://example.com");
        assert!(is_safe_target(&o, Some("/profile")));
        assert!(is_safe_target(&o, Some("profile?page=2")));
        assert!(is_safe_target(&o, Some("../up")));
    }

    #[test]
    fn same_origin_absolute_url_is_safe() {
        let o = origin("http://example.com");
        assert!(is_safe_target(&o, Some("http://example.com/hello")));
    }

    #[test]
    fn cross_origin_is_unsafe() {
        let o = origin("http://example.com");
        assert!(!is_safe_target(&o, Some("http://evil.com/x")));
        assert!(!is_safe_target(&o, Some("http://sub.example.com/x")));
    }

    #[test]
    fn differing_port_is_unsafe() {
        let o = origin("http://example.com:5000");
        assert!(!is_safe_target(&o, Some("http://example.com/x")));
        assert!(!is_safe_target(&o, Some("http://example.com:8080/x")));
        assert!(is_safe_target(&o, Some("http://example.com:5000/x")));
    }

    #[test]
    fn absent_and_empty_are_unsafe() {
        let o = origin("http://example.com");
        assert!(!is_safe_target(&o, None));
        assert!(!is_safe_target(&o, Some("")));
    }

    #[test]
    fn non_web_schemes_are_unsafe() {
        let o = origin("http://example.com");
        assert!(!is_safe_target(&o, Some("javascript:alert(1)")));
        assert!(!is_safe_target(&o, Some("ftp://example.com/file")));
        assert!(!is_safe_target(&o, Some("data:text/html,hi")));
    }

    #[test]
    fn protocol_relative_and_backslash_tricks_are_unsafe() {
        let o = origin("http://example.com");
        // Both of these resolve to a different host once joined.
        assert!(!is_safe_target(&o, Some("//evil.com/x")));
        assert!(!is_safe_target(&o, Some("/\\evil.com/x")));
    }

    #[test]
    fn is_safe_target_is_pure() {
        let o = origin("http://example.com");
        for _ in 0..3 {
            assert!(is_safe_target(&o, Some("/profile")));
            assert!(!is_safe_target(&o, Some("http://evil.com")));
        }
    }

    #[test]
    fn resolve_redirect_picks_first_safe_candidate() {
        let o = origin("http://example.com");
        let picked = resolve_redirect(&o, &[Some("http://evil.com/x"), Some("/profile")], "/home");
        assert_eq!(picked, "/profile");
    }

    #[test]
    fn resolve_redirect_skips_absent_candidates() {
        let o = origin("http://example.com");
        let picked = resolve_redirect(&o, &[None, Some("/profile")], "/home");
        assert_eq!(picked, "/profile");
    }

    #[test]
    fn resolve_redirect_falls_back_to_default() {
        let o = origin("http://example.com");
        let picked = resolve_redirect(&o, &[None, Some("http://evil.com")], "/home");
        assert_eq!(picked, "/home");

        let picked = resolve_redirect(&o, &[], "/home");
        assert_eq!(picked, "/home");
    }
}
