//! Access gate integration tests.
//!
//! `init` requires the deployer attribute; every other operation is
//! ungated. Denial messages reach the caller verbatim and a denied
//! invocation performs no state write.

mod common;

use keystone_contract::{LedgerContract, TransactionStub};
use keystone_shim::MemStore;

use common::*;

// ── Test: init denied without the attribute ──

#[test]
fn test_init_without_attribute_is_denied() {
    let mut stub = unauthorized_stub();

    let resp = LedgerContract::init(&mut stub, &args(&["A", "123"]));
    assert!(!resp.is_ok());
    assert_eq!(
        resp.message,
        "attribute 'sampleChainCode.init' was not found"
    );

    // Denied before any write.
    assert_eq!(stub.state_len(), 0);
}

#[test]
fn test_init_with_wrong_attribute_value_is_denied() {
    let mut stub = unauthorized_stub();
    stub.set_attribute(INIT_ATTRIBUTE, "false");

    let resp = LedgerContract::init(&mut stub, &args(&["A", "123"]));
    assert!(!resp.is_ok());
    assert_eq!(
        resp.message,
        "attribute 'sampleChainCode.init' equals 'false', not 'true'"
    );
    assert_eq!(stub.state_len(), 0);
}

#[test]
fn test_init_with_attribute_succeeds() {
    let mut stub = authorized_stub();

    let resp = LedgerContract::init(&mut stub, &args(&["A", "123"]));
    assert!(resp.is_ok());
    check_state(&stub, "A", "123");
}

// ── Test: the gate applies on the invoke path too ──

#[test]
fn test_invoke_init_is_gated() {
    let mut stub = unauthorized_stub();

    let resp = LedgerContract::invoke(&mut stub, "init", &args(&["A", "123"]));
    assert!(!resp.is_ok());
    assert_eq!(
        resp.message,
        "attribute 'sampleChainCode.init' was not found"
    );
}

// ── Test: the gate runs before argument validation ──

#[test]
fn test_gate_is_checked_before_arity() {
    let mut stub = unauthorized_stub();

    // Bad arity AND missing attribute: the denial wins.
    let resp = LedgerContract::init(&mut stub, &args(&["A"]));
    assert_eq!(
        resp.message,
        "attribute 'sampleChainCode.init' was not found"
    );
}

// ── Test: other operations are ungated ──

#[test]
fn test_other_operations_need_no_attribute() {
    let mut stub = unauthorized_stub();
    stub.set_state("A", b"1".to_vec());

    check_query(&mut stub, "A", "1");
    check_update(&mut stub, "A", "2");
    check_put_multiple(&mut stub, "A", "3", "2");

    let resp = LedgerContract::invoke(&mut stub, "delete", &args(&["A"]));
    assert!(resp.is_ok());
}

// ── Test: identity resolution failure surfaces verbatim ──

#[test]
fn test_unresolvable_identity_is_denied_with_platform_message() {
    let mut store = MemStore::new();
    let identity = UnresolvableIdentity;
    let mut stub = TransactionStub::new(&mut store, &identity);

    let resp = LedgerContract::init(&mut stub, &args(&["A", "123"]));
    assert!(!resp.is_ok());
    assert_eq!(
        resp.message,
        "failed to resolve caller identity: credential unavailable"
    );
    assert!(store.is_empty());
}
