#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use counterhub_server::{app_state::AppState, config::ServerConfig, router::build_router};

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_and_readyz() {
    let state = AppState::new(ServerConfig::default()).unwrap();
    let app = build_router(state.clone());

    assert_eq!(send(&app, "GET", "/healthz").await, (StatusCode::OK, "ok".into()));
    assert_eq!(send(&app, "GET", "/readyz").await, (StatusCode::OK, "ready".into()));

    state.set_draining();
    assert_eq!(
        send(&app, "GET", "/readyz").await,
        (StatusCode::SERVICE_UNAVAILABLE, "draining".into())
    );
}

#[tokio::test]
async fn metrics_track_routes_ops_and_live_counters() {
    let app = build_router(AppState::new(ServerConfig::default()).unwrap());
    send(&app, "POST", "/counters/a").await;
    send(&app, "POST", "/counters/a").await;
    send(&app, "POST", "/counters/b").await;
    send(&app, "GET", "/counters/missing").await;

    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let body = String::from_utf8(to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();

    assert!(body.contains(
        "counterhub_http_requests_total{method=\"POST\",route=\"/counters/:name\",status=\"201\"} 2"
    ));
    assert!(body.contains(
        "counterhub_http_requests_total{method=\"POST\",route=\"/counters/:name\",status=\"409\"} 1"
    ));
    assert!(body.contains("counterhub_counter_ops_total{op=\"create\",outcome=\"already_exists\"} 1"));
    assert!(body.contains("counterhub_counter_ops_total{op=\"get\",outcome=\"not_found\"} 1"));
    assert!(body.contains("counterhub_counters_live 2"));
    assert!(body.contains("counterhub_draining 0"));
    // raw counter names never become label values
    assert!(!body.contains("/counters/a\""));
}
