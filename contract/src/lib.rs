//! `keystone-contract` — deterministic transaction dispatch and state
//! mutation for the Keystone ledger.
//!
//! This crate implements the state transition contract every node of the
//! replicated ledger executes: five named operations over a platform-owned
//! key-value store, with an attribute-based access gate on the instantiate
//! path. Given the same invocation and the same state, every node computes
//! the same response.
//!
//! ## Architecture
//!
//! - [`stub::LedgerStub`] — trait bundling what one invocation may touch
//!   (state, caller attributes, collected logs)
//! - [`stub::TransactionStub`] — production stub over injected collaborators
//! - [`stub::MockStub`] — self-contained in-memory stub for testing
//! - [`access`] — declarative attribute-based access requirements
//! - [`validation`] — argument arity, key, and integer validation
//! - [`handlers`] — the five operation handlers
//! - [`dispatch::LedgerContract`] — `init`/`invoke` entry points

pub mod access;
pub mod dispatch;
pub mod handlers;
pub mod stub;
pub mod validation;

// Re-export key types for convenience
pub use access::{AccessRequirement, INIT_ACCESS};
pub use dispatch::{LedgerContract, Operation};
pub use stub::{LedgerStub, MockStub, TransactionStub};
