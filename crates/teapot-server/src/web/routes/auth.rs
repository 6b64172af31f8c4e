//! Session login flag: `/login`, `/logout`, and the `/admin` gate.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use teapot_core::session;

use crate::web::extract::{found_with_cookie, get_cookie};
use crate::web::AppState;

pub async fn login(State(state): State<AppState>) -> Response {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly",
        session::SESSION_COOKIE,
        session::login_cookie_value(&state.secret)
    );
    found_with_cookie("/hello", Some(&cookie))
}

pub async fn logout() -> Response {
    // Expire the cookie; no need to know whether it was set.
    let cookie = format!("{}=; Path=/; Max-Age=0", session::SESSION_COOKIE);
    found_with_cookie("/hello", Some(&cookie))
}

pub async fn admin(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session_cookie = get_cookie(&headers, session::SESSION_COOKIE);
    if session::is_logged_in(&state.secret, session_cookie) {
        "welcome to admin page".into_response()
    } else {
        StatusCode::FORBIDDEN.into_response()
    }
}
