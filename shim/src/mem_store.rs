//! In-memory state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering. Useful for unit tests, integration tests, and embedding
//! the contract without a real ledger backend.

use std::collections::BTreeMap;

use keystone_primitives::PlatformError;

use crate::state_store::StateStore;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Create a store pre-populated with data.
    pub fn with_data(data: BTreeMap<String, Vec<u8>>) -> Self {
        Self { data }
    }

    /// Insert a key-value pair directly, bypassing the trait.
    pub fn insert(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.data.insert(key.into(), value);
    }

    /// Remove a key directly, bypassing the trait.
    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PlatformError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), PlatformError> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), PlatformError> {
        self.data.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, PlatformError> {
        Ok(self.data.contains_key(key))
    }
}
