//! `/` and `/hello`: greeting from a query parameter or cookie, plus an
//! authentication marker derived from the signed session cookie.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use serde::Deserialize;
use teapot_core::session;

use crate::web::extract::{escape_html, get_cookie};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct HelloParams {
    pub name: Option<String>,
}

pub async fn hello(
    State(state): State<AppState>,
    Query(params): Query<HelloParams>,
    headers: HeaderMap,
) -> Html<String> {
    // Query parameter wins over the cookie; "Human" is the last resort.
    let name = params
        .name
        .as_deref()
        .or_else(|| get_cookie(&headers, "name"))
        .unwrap_or("Human");

    let session_cookie = get_cookie(&headers, session::SESSION_COOKIE);
    let marker = if session::is_logged_in(&state.secret, session_cookie) {
        "[Authenticated]"
    } else {
        "[Not Authenticated]"
    };

    Html(format!("<h1>Hello, {}!</h1>{marker}", escape_html(name)))
}
