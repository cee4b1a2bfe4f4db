//! Top-level facade crate for counterhub.
//!
//! Re-exports the core store and the server library so users can depend on a single crate.

pub mod core {
    pub use counterhub_core::*;
}

pub mod server {
    pub use counterhub_server::*;
}
