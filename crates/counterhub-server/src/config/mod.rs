//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use counterhub_core::error::{CounterError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Env var that overrides the config file path.
pub const CONFIG_PATH_ENV: &str = "COUNTERHUB_CONFIG";
/// Config file used when the env var is unset.
pub const DEFAULT_CONFIG_PATH: &str = "counterhub.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        CounterError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| CounterError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `$COUNTERHUB_CONFIG` (or `counterhub.yaml`).
///
/// A missing file yields the defaults; a present but invalid file is an error.
pub fn load_or_default() -> Result<ServerConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    match fs::metadata(&path) {
        Ok(_) => load_from_file(&path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path, "config file not found, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(CounterError::Internal(format!("stat config failed ({path}): {e}"))),
    }
}
