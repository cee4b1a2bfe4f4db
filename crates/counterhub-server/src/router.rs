//! Axum route table.
//!
//! Each (method, path) pair maps to exactly one handler; anything else falls
//! through to a JSON 404 (unknown path) or axum's 405 (known path, wrong verb).

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, http, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/counters/:name",
            get(http::counters::read)
                .post(http::counters::create)
                .put(http::counters::increment)
                .delete(http::counters::delete),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .fallback(http::error::no_route)
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_http))
        .with_state(state)
}
