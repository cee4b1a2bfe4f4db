use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::app_state::AppState;

/// Route label for requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Per-request span + metrics.
///
/// Metrics are labelled by the route template (`/counters/:name`), not the raw
/// path, so series cardinality does not grow with counter names.
pub async fn track_http(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());
    let span = tracing::info_span!("http", method = %method, path = %req.uri().path());

    let started = Instant::now();
    let res = next.run(req).instrument(span.clone()).await;
    let elapsed = started.elapsed();

    let status = res.status();
    let metrics = state.metrics();
    metrics.http_requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    metrics.http_duration.observe(&[("route", route.as_str())], elapsed);

    let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), micros, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), micros, "request done");
        }
    });
    res
}
