//! Invocation-scoped stub — the contract's window onto the platform.
//!
//! `LedgerStub` bundles everything a handler may touch during one
//! invocation: the ledger state, the caller's resolved attributes, and the
//! invocation's collected log lines. A stub lives for exactly one
//! invocation; the contract holds nothing across invocations.
//!
//! - In production: `TransactionStub` borrows the platform's collaborators
//! - In tests: `MockStub` owns an in-memory store and a static identity

use keystone_primitives::{LogLine, PlatformError};
use keystone_shim::{CallerIdentity, MemStore, StateStore, StaticIdentity};

/// Abstraction over the platform surface available to one invocation.
///
/// Handlers call these methods and nothing else; the platform decides what
/// backs them. All calls are synchronous and observe a consistent snapshot
/// for the duration of the invocation.
pub trait LedgerStub {
    /// Read a value from ledger state.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, PlatformError>;

    /// Write a key-value pair, overwriting any prior value.
    ///
    /// Writes go straight through to the store; envelope-level atomicity
    /// across an invocation is the platform's responsibility.
    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), PlatformError>;

    /// Remove a key. Removing an absent key is not an error.
    fn state_delete(&mut self, key: &str) -> Result<(), PlatformError>;

    /// Look up a named attribute of the caller's credential.
    ///
    /// Consulted by the access gate; returns `Ok(None)` when the
    /// credential carries no such attribute.
    fn attribute_value(&self, name: &str) -> Result<Option<String>, PlatformError>;

    /// Record a log line for this invocation.
    ///
    /// Logs are handed back to the platform after the call and are never
    /// consensus-critical; handlers must not branch on logging.
    fn log(&mut self, level: u32, message: &str);

    /// Access the log lines collected so far.
    fn logs(&self) -> &[LogLine];
}

// ── TransactionStub: production stub over injected collaborators ──

/// Stub for one real invocation, borrowing the platform's collaborators.
///
/// Created fresh by the platform for each invocation and dropped when the
/// response has been returned.
pub struct TransactionStub<'a> {
    store: &'a mut dyn StateStore,
    identity: &'a dyn CallerIdentity,
    logs: Vec<LogLine>,
}

impl<'a> TransactionStub<'a> {
    /// Create a stub over the platform's state store and caller identity.
    pub fn new(store: &'a mut dyn StateStore, identity: &'a dyn CallerIdentity) -> Self {
        Self {
            store,
            identity,
            logs: Vec::new(),
        }
    }

    /// Consume the stub, yielding the collected log lines.
    pub fn into_logs(self) -> Vec<LogLine> {
        self.logs
    }
}

impl LedgerStub for TransactionStub<'_> {
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, PlatformError> {
        self.store.get(key)
    }

    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), PlatformError> {
        self.store.put(key, value)
    }

    fn state_delete(&mut self, key: &str) -> Result<(), PlatformError> {
        self.store.delete(key)
    }

    fn attribute_value(&self, name: &str) -> Result<Option<String>, PlatformError> {
        self.identity.attribute_value(name)
    }

    fn log(&mut self, level: u32, message: &str) {
        self.logs.push(LogLine {
            level,
            message: message.to_string(),
        });
    }

    fn logs(&self) -> &[LogLine] {
        &self.logs
    }
}

// ── MockStub: self-contained stub for testing ──

/// In-memory stub for deterministic testing.
///
/// Owns a `MemStore` and a `StaticIdentity` so tests need no external
/// setup, and exposes the state directly for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockStub {
    store: MemStore,
    identity: StaticIdentity,
    logs: Vec<LogLine>,
}

impl MockStub {
    /// Create a stub with empty state and a caller with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub whose caller carries the given identity.
    pub fn with_identity(identity: StaticIdentity) -> Self {
        Self {
            store: MemStore::new(),
            identity,
            logs: Vec::new(),
        }
    }

    /// Set a caller attribute in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.identity.set_attribute(name, value);
    }

    /// Seed ledger state directly, bypassing the contract.
    pub fn set_state(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.store.insert(key, value);
    }

    /// Read ledger state directly for assertions.
    pub fn state_of(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key).unwrap_or_default()
    }

    /// Number of entries currently in the ledger state.
    pub fn state_len(&self) -> usize {
        self.store.len()
    }
}

impl LedgerStub for MockStub {
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, PlatformError> {
        self.store.get(key)
    }

    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), PlatformError> {
        self.store.put(key, value)
    }

    fn state_delete(&mut self, key: &str) -> Result<(), PlatformError> {
        self.store.delete(key)
    }

    fn attribute_value(&self, name: &str) -> Result<Option<String>, PlatformError> {
        self.identity.attribute_value(name)
    }

    fn log(&mut self, level: u32, message: &str) {
        self.logs.push(LogLine {
            level,
            message: message.to_string(),
        });
    }

    fn logs(&self) -> &[LogLine] {
        &self.logs
    }
}
