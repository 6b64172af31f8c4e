//! Signed session cookie carrying a single boolean login flag.
//!
//! The cookie value is `logged_in.<hex hmac-sha256>`, keyed on the server
//! secret. A tampered, truncated, or foreign-keyed cookie simply reads as
//! "not logged in" — the same fail-closed posture as the redirect check.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

const LOGIN_FLAG: &str = "logged_in";

fn sign(secret: &str, value: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("hmac accepts keys of any length");
    mac.update(value.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Cookie value that marks the session as logged in.
pub fn login_cookie_value(secret: &str) -> String {
    format!("{}.{}", LOGIN_FLAG, sign(secret, LOGIN_FLAG))
}

/// Check a raw session cookie value for a validly signed login flag.
/// Verification is constant-time via the hmac crate.
pub fn is_logged_in(secret: &str, cookie: Option<&str>) -> bool {
    let Some(raw) = cookie else {
        return false;
    };
    let Some((value, sig_hex)) = raw.rsplit_once('.') else {
        return false;
    };
    if value != LOGIN_FLAG {
        return false;
    }
    let Ok(sig) = hex::decode(sig_hex) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("hmac accepts keys of any length");
    mac.update(value.as_bytes());
    mac.verify_slice(&sig).is_ok()
}
