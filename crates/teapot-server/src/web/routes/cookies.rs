//! `/set/{name}`: remember the visitor name in a cookie, then bounce home.

use axum::extract::Path;
use axum::response::Response;

use crate::web::extract::found_with_cookie;

pub async fn set_name(Path(name): Path<String>) -> Response {
    found_with_cookie("/hello", Some(&format!("name={name}; Path=/")))
}
