//! In-memory counter store.
//!
//! Counters live in a sharded `DashMap`. Every read-modify-write runs while the
//! entry's shard guard is held, so concurrent increments on the same name
//! never lose an update and create is a single check-and-insert.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{CounterError, Result};

/// Owner of all counters: name -> value.
#[derive(Debug, Default)]
pub struct CounterStore {
    counters: DashMap<String, u64>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Create `name` with value 0. Fails if the name is taken.
    pub fn create(&self, name: &str) -> Result<u64> {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(CounterError::AlreadyExists(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                tracing::debug!(name = %name, "counter created");
                Ok(0)
            }
        }
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Result<u64> {
        self.counters
            .get(name)
            .map(|v| *v.value())
            .ok_or_else(|| CounterError::NotFound(name.to_string()))
    }

    /// Add one to `name` and return the new value.
    ///
    /// Saturates at `u64::MAX`.
    pub fn increment(&self, name: &str) -> Result<u64> {
        let mut v = self
            .counters
            .get_mut(name)
            .ok_or_else(|| CounterError::NotFound(name.to_string()))?;
        *v = v.saturating_add(1);
        Ok(*v)
    }

    /// Remove `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        match self.counters.remove(name) {
            Some(_) => {
                tracing::debug!(name = %name, "counter deleted");
                Ok(())
            }
            None => Err(CounterError::NotFound(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
