//! Shared test helpers for integration tests.
//!
//! Provides stub factories with and without the deployer attribute, the
//! `check_*` assertion helpers used across test files, and
//! failure-injecting collaborators for error-path coverage.

#![allow(dead_code)]

use keystone_contract::{LedgerContract, MockStub};
use keystone_primitives::PlatformError;
use keystone_shim::{CallerIdentity, MemStore, StateStore, StaticIdentity};

/// Attribute an authorized deployer must carry with value `"true"`.
pub const INIT_ATTRIBUTE: &str = "sampleChainCode.init";

/// Stub whose caller is authorized to run `init`.
pub fn authorized_stub() -> MockStub {
    MockStub::with_identity(StaticIdentity::new().with_attribute(INIT_ATTRIBUTE, "true"))
}

/// Stub whose caller carries no attributes at all.
pub fn unauthorized_stub() -> MockStub {
    MockStub::new()
}

/// Build an owned argument vector from string literals.
pub fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

// ── Assertion helpers ──

/// Run `init` and require success.
pub fn check_init(stub: &mut MockStub, key: &str, value: &str) {
    let resp = LedgerContract::init(stub, &args(&[key, value]));
    assert!(resp.is_ok(), "init {} failed: {}", key, resp.message);
}

/// Require that ledger state holds exactly `value` for `key`.
pub fn check_state(stub: &MockStub, key: &str, value: &str) {
    let bytes = stub
        .state_of(key)
        .unwrap_or_else(|| panic!("state {} failed to get value", key));
    assert_eq!(
        bytes,
        value.as_bytes(),
        "state value {} was not {} as expected",
        key,
        value
    );
}

/// Run `query` and require the expected payload.
pub fn check_query(stub: &mut MockStub, key: &str, value: &str) {
    let resp = LedgerContract::invoke(stub, "query", &args(&[key]));
    assert!(resp.is_ok(), "query {} failed: {}", key, resp.message);
    assert_eq!(
        resp.payload,
        value.as_bytes(),
        "query value {} was not {} as expected",
        key,
        value
    );
}

/// Run `update` and require the expected payload.
pub fn check_update(stub: &mut MockStub, key: &str, value: &str) {
    let resp = LedgerContract::invoke(stub, "update", &args(&[key, value]));
    assert!(resp.is_ok(), "update {} failed: {}", key, resp.message);
    assert_eq!(
        resp.payload,
        value.as_bytes(),
        "update value {} was not {} as expected",
        key,
        value
    );
}

/// Run `putMultiple` and require success.
pub fn check_put_multiple(stub: &mut MockStub, key: &str, value: &str, times: &str) {
    let resp = LedgerContract::invoke(stub, "putMultiple", &args(&[key, value, times]));
    assert!(
        resp.is_ok(),
        "putMultiple {} failed: {}",
        key,
        resp.message
    );
}

// ── Failure-injecting collaborators ──

/// State store that fails on demand.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    /// Backing store for operations that are allowed through.
    pub inner: MemStore,
    /// Writes allowed before `put` starts failing; `None` never fails.
    pub puts_before_failure: Option<usize>,
    /// Whether `get` fails.
    pub fail_gets: bool,
    /// Whether `delete` fails.
    pub fail_deletes: bool,
}

impl FailingStore {
    /// Store that fails every read.
    pub fn failing_reads() -> Self {
        Self {
            fail_gets: true,
            ..Self::default()
        }
    }

    /// Store that fails every delete.
    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    /// Store that allows `n` writes, then fails every subsequent one.
    pub fn failing_after(n: usize) -> Self {
        Self {
            puts_before_failure: Some(n),
            ..Self::default()
        }
    }
}

impl StateStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PlatformError> {
        if self.fail_gets {
            return Err(PlatformError::Store(format!("read rejected for {}", key)));
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), PlatformError> {
        if let Some(remaining) = self.puts_before_failure {
            if remaining == 0 {
                return Err(PlatformError::Store(format!("write rejected for {}", key)));
            }
            self.puts_before_failure = Some(remaining - 1);
        }
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), PlatformError> {
        if self.fail_deletes {
            return Err(PlatformError::Store(format!("delete rejected for {}", key)));
        }
        self.inner.delete(key)
    }
}

/// Identity whose resolution always fails at the platform level.
#[derive(Debug, Clone, Default)]
pub struct UnresolvableIdentity;

impl CallerIdentity for UnresolvableIdentity {
    fn attribute_value(&self, _name: &str) -> Result<Option<String>, PlatformError> {
        Err(PlatformError::Identity("credential unavailable".into()))
    }
}
