//! Redirect routes, including the safe "redirect back" flow.
//!
//! `/do-something` is the interesting one: it honors the `next` query
//! parameter or, failing that, the `Referer` header — but only after the
//! origin check in `teapot_core::redirect` accepts the target. Everything
//! cross-origin falls through to `/hello`.

use axum::extract::Query;
use axum::http::{header, HeaderMap, Uri};
use axum::response::{Html, Response};
use serde::Deserialize;
use teapot_core::redirect::resolve_redirect;

use crate::web::extract::{found, request_origin};

/// Fallback destination when no redirect candidate passes the origin check.
const DEFAULT_DESTINATION: &str = "/hello";

pub async fn hi() -> Response {
    found("/hello")
}

#[derive(Debug, Deserialize)]
pub struct NextParam {
    pub next: Option<String>,
}

pub async fn foo(uri: Uri) -> Html<String> {
    Html(back_link_page("foo", &uri))
}

pub async fn bar(uri: Uri) -> Html<String> {
    Html(back_link_page("bar", &uri))
}

/// Page whose link carries the current path and query as the `next`
/// parameter, so `/do-something` can send the visitor back here.
fn back_link_page(title: &str, uri: &Uri) -> String {
    let full_path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let next: String = url::form_urlencoded::byte_serialize(full_path.as_bytes()).collect();
    format!(
        "<h1>{title} page</h1><a href=\"/do-something?next={next}\">do something and redirect</a>"
    )
}

pub async fn do_something(Query(params): Query<NextParam>, headers: HeaderMap) -> Response {
    let Some(origin) = request_origin(&headers) else {
        // No usable Host header; nothing to validate against.
        return found(DEFAULT_DESTINATION);
    };

    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok());
    let candidates = [params.next.as_deref(), referrer];

    found(resolve_redirect(&origin, &candidates, DEFAULT_DESTINATION))
}
