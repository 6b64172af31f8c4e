//! Axum application: shared state, route table, request/response adapters.

pub mod extract;
mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use teapot_core::config::ServerConfig;

/// Immutable per-process state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session-cookie signing key.
    pub secret: Arc<str>,
}

impl AppState {
    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self {
            secret: cfg.effective_secret().into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::hello::hello))
        .route("/hello", get(routes::hello::hello))
        .route("/hi", get(routes::redirects::hi))
        .route("/goback/:year", get(routes::segments::go_back))
        .route("/colors/:color", get(routes::segments::three_colors))
        .route("/brew/:drink", get(routes::segments::brew))
        .route("/404", get(routes::segments::not_found))
        .route("/note", get(routes::note::note_default))
        .route("/note/:format", get(routes::note::note))
        .route("/set/:name", get(routes::cookies::set_name))
        .route("/login", get(routes::auth::login))
        .route("/logout", get(routes::auth::logout))
        .route("/admin", get(routes::auth::admin))
        .route("/post", get(routes::post::show_post))
        .route("/more", get(routes::post::load_more))
        .route("/foo", get(routes::redirects::foo))
        .route("/bar", get(routes::redirects::bar))
        .route("/do-something", get(routes::redirects::do_something))
        .with_state(state)
}
