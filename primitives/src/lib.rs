//! `keystone-primitives` — foundational types for the Keystone ledger contract.
//!
//! This crate provides the canonical types shared by the platform shim and
//! the contract crate: the decimal amount codec, the two-layer error model
//! (platform collaborator failures vs. terminal contract failures), and the
//! invocation response types returned to the ledger platform.

pub mod error;
pub mod response;
pub mod types;

// Re-export commonly used types at the crate root for convenience.
pub use error::{ContractError, ContractResult, PlatformError};
pub use response::{
    LogLine, QueryResponse, Response, ResponseStatus, LOG_DEBUG, LOG_ERROR, LOG_INFO, LOG_TRACE,
    LOG_WARN,
};
pub use types::{amount_from_bytes, amount_from_str, amount_to_bytes, Amount};
