//! HTTP resource layer: maps REST verbs on `/counters` to store operations.

pub mod counters;
pub mod error;

pub use error::ApiError;
