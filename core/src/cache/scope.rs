use crate::descriptors::BehaviorInstance;
use crate::errors::{error_codes, FiltriumError};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Keyed singleton cache for one lifetime scope (e.g. one session).
///
/// The caller owns the scope and its lifetime: dropping the `CacheScope`
/// releases the entries, and the cache itself never disposes anything —
/// cached instances are externally owned. Each scope carries its own lock,
/// so construction in one scope never blocks callers in another.
#[derive(Default)]
pub struct CacheScope {
    entries: Mutex<HashMap<String, BehaviorInstance>>,
}

impl CacheScope {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the instance memoized under `key`, constructing it via
    /// `factory` on first access.
    ///
    /// The lock is held across check, construct and store, so concurrent
    /// callers for the same scope observe at most one construction per key.
    /// A slow factory therefore blocks other keys in the same scope; callers
    /// needing bounded latency must wrap the factory with their own timeout.
    ///
    /// On factory failure nothing is stored and the error propagates; a later
    /// call may retry construction.
    pub fn get_or_create<F>(&self, key: &str, factory: F) -> Result<BehaviorInstance, FiltriumError>
    where
        F: FnOnce() -> Result<BehaviorInstance, FiltriumError>,
    {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(key) {
            return Ok(existing.clone());
        }
        log::trace!("cache miss for key '{}', constructing", key);
        let instance = factory().map_err(|source| FiltriumError::Cache {
            code: error_codes::CONSTRUCTION_FAILED.to_string(),
            message: format!("factory for key '{}' failed: {}", key, source),
        })?;
        entries.insert(key.to_string(), instance.clone());
        Ok(instance)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
