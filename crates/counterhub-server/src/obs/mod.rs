//! Lightweight in-process observability.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.
//! `track_http` wraps every route with a tracing span and records
//! request count and latency.

pub mod metrics;
mod middleware;

pub use metrics::ServerMetrics;
pub use middleware::track_http;
