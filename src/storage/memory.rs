use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::CartStorage;
use crate::error::StorageError;

/// Volatile store. Clones share the same map, so a test can keep one handle
/// and give the other to the cart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.lock().map(|count| *count).unwrap_or_default()
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        let mut writes = self.writes.lock().map_err(|_| StorageError::Poisoned)?;
        *writes += 1;
        Ok(())
    }
}
