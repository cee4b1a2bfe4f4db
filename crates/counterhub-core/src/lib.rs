//! counterhub core: the in-memory counter store and the shared error surface.
//!
//! This crate carries no HTTP or runtime dependencies. The server crate owns
//! the translation of store outcomes into status codes and response bodies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `CounterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;

/// Shared result type.
pub use error::{ClientCode, CounterError, Result};
pub use store::CounterStore;
