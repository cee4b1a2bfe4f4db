//! Shared error type across counterhub crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Counter name already taken.
    AlreadyExists,
    /// Counter does not exist.
    NotFound,
    /// Invalid input / malformed request.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::AlreadyExists => "ALREADY_EXISTS",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Unified error type used by core and server.
///
/// Display strings are sent to clients verbatim, so they name the counter but
/// never its value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("counter already exists: {0}")]
    AlreadyExists(String),
    #[error("counter not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CounterError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CounterError::AlreadyExists(_) => ClientCode::AlreadyExists,
            CounterError::NotFound(_) => ClientCode::NotFound,
            CounterError::BadRequest(_) => ClientCode::BadRequest,
            CounterError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CounterError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Expected, client-caused outcomes of a store call.
    pub fn is_expected(&self) -> bool {
        matches!(self, CounterError::AlreadyExists(_) | CounterError::NotFound(_))
    }
}
