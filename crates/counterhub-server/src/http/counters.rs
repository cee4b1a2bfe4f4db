//! `/counters` resource handlers.
//!
//! Success bodies are a single-key JSON object, `{"foo": 3}`.
//! The `{name}` path segment is used as-is after percent-decoding.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use counterhub_core::error::{CounterError, Result};

use crate::app_state::AppState;
use crate::http::error::ApiError;

type CounterBody = Json<BTreeMap<String, u64>>;

fn body(name: String, value: u64) -> CounterBody {
    Json(BTreeMap::from([(name, value)]))
}

/// Operator-configured name cap; no limit unless `server.max_name_len` is set.
fn check_name(state: &AppState, name: &str) -> Result<()> {
    let Some(max) = state.cfg().server.max_name_len else {
        return Ok(());
    };
    if name.len() > max {
        return Err(CounterError::BadRequest(format!(
            "counter name longer than {max} bytes"
        )));
    }
    Ok(())
}

/// Run one store op and count its outcome.
fn run_op<T>(state: &AppState, op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let res = f();
    let outcome = match &res {
        Ok(_) => "ok",
        Err(CounterError::AlreadyExists(_)) => "already_exists",
        Err(CounterError::NotFound(_)) => "not_found",
        Err(_) => "error",
    };
    state
        .metrics()
        .counter_ops
        .inc(&[("op", op), ("outcome", outcome)]);
    res
}

/// `POST /counters/{name}` -> 201 `{name: 0}` | 409
pub async fn create(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> std::result::Result<(StatusCode, CounterBody), ApiError> {
    check_name(&state, &name)?;
    let value = run_op(&state, "create", || state.store().create(&name))?;
    Ok((StatusCode::CREATED, body(name, value)))
}

/// `GET /counters/{name}` -> 200 `{name: value}` | 404
pub async fn read(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> std::result::Result<CounterBody, ApiError> {
    check_name(&state, &name)?;
    let value = run_op(&state, "get", || state.store().get(&name))?;
    Ok(body(name, value))
}

/// `PUT /counters/{name}` -> 200 `{name: value + 1}` | 404
pub async fn increment(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> std::result::Result<CounterBody, ApiError> {
    check_name(&state, &name)?;
    let value = run_op(&state, "increment", || state.store().increment(&name))?;
    Ok(body(name, value))
}

/// `DELETE /counters/{name}` -> 204 | 404
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> std::result::Result<StatusCode, ApiError> {
    check_name(&state, &name)?;
    run_op(&state, "delete", || state.store().delete(&name))?;
    Ok(StatusCode::NO_CONTENT)
}
