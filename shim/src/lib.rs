//! `keystone-shim` — ledger platform collaborator traits for Keystone.
//!
//! The contract never owns ledger state or identity data; both are
//! supplied per invocation by the external ledger platform. This crate
//! defines that boundary:
//!
//! - `StateStore` trait — the versioned key-value ledger state
//! - `CallerIdentity` trait — attribute resolution for the invoker
//! - `MemStore` — in-memory `StateStore` for tests and embedding
//! - `StaticIdentity` — fixed-attribute `CallerIdentity` for tests

pub mod identity;
pub mod mem_store;
pub mod state_store;

// Re-export commonly used types at the crate root.
pub use identity::{CallerIdentity, StaticIdentity};
pub use mem_store::MemStore;
pub use state_store::StateStore;
