//! counterhub server library entry.
//!
//! Wires config, the shared store, the `/counters` resource layer, ops
//! endpoints and request observability into one axum `Router`. Consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
