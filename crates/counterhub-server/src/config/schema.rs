use std::net::SocketAddr;

use serde::Deserialize;
use counterhub_core::error::{CounterError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CounterError::UnsupportedVersion);
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Longest accepted counter name, in bytes. Unset means no limit.
    #[serde(default)]
    pub max_name_len: Option<usize>,

    /// Time `/readyz` reports draining before the listener stops accepting.
    #[serde(default)]
    pub shutdown_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_name_len: None,
            shutdown_grace_ms: 0,
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if let Some(max) = self.max_name_len {
            if !(1..=4096).contains(&max) {
                return Err(CounterError::BadRequest(
                    "server.max_name_len must be between 1 and 4096".into(),
                ));
            }
        }
        if self.shutdown_grace_ms > 60_000 {
            return Err(CounterError::BadRequest(
                "server.shutdown_grace_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            CounterError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
