//! Ledger state storage abstraction.
//!
//! `StateStore` is the contract's view of the shared, versioned key-value
//! ledger state. The platform owns the store; the contract reads and
//! writes through this trait for the duration of a single invocation and
//! holds nothing across invocations. Ordering and conflict detection
//! between concurrent invocations happen in the platform, after the
//! contract returns.
//!
//! Implementations:
//! - `MemStore` (this crate) — in-memory BTreeMap for tests and embedding
//! - the real ledger backend, provided by the platform

use keystone_primitives::PlatformError;

/// Abstraction over the ledger's key-value state.
///
/// Implementations must be deterministic: within one invocation, the same
/// key returns the same value unless this invocation wrote it.
pub trait StateStore {
    /// Get the stored value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist. An `Err` means the
    /// store itself failed, which is distinct from a miss.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PlatformError>;

    /// Write a key-value pair, overwriting any prior value.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), PlatformError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), PlatformError>;

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, PlatformError> {
        Ok(self.get(key)?.is_some())
    }
}
