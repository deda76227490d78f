//! Error types for the Keystone ledger contract.
//!
//! Two layers, mirroring the two sides of the invocation boundary:
//!
//! - [`PlatformError`] — a collaborator (state store, identity resolution)
//!   failed. The contract never interprets these beyond "operation failed"
//!   and never retries.
//! - [`ContractError`] — a terminal failure of the current invocation.
//!   `Display` strings are the caller-visible failure messages; several are
//!   fixed wire strings that external callers match on, so they must not be
//!   reworded.

use thiserror::Error;

/// Failure reported by a ledger-platform collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The state store failed to complete a read, write, or delete.
    #[error("state store failure: {0}")]
    Store(String),

    /// The platform could not resolve the caller identity or its attributes.
    #[error("failed to resolve caller identity: {0}")]
    Identity(String),
}

/// Terminal failure of a single contract invocation.
///
/// Every variant maps to one of the contract's failure kinds: access
/// denial, arity mismatch, type mismatch, unknown operation, store read
/// failure, store write failure, and key-not-found. All are reported
/// synchronously in the invocation's [`Response`](crate::Response); none
/// are retried or swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The caller identity does not satisfy the declared access
    /// requirement. Carries the gate's message verbatim so the caller can
    /// see exactly which check failed.
    #[error("{0}")]
    AccessDenied(String),

    /// Argument count does not match the operation's arity.
    #[error("Incorrect number of arguments. Expecting {expected}")]
    WrongArity { expected: usize, got: usize },

    /// An argument that must be a base-10 integer failed to parse.
    #[error("Expecting integer value for asset holding")]
    ExpectingInteger,

    /// Entity keys must be non-empty strings.
    #[error("Expecting non-empty entity key")]
    EmptyKey,

    /// The operation name matched none of the known operations.
    #[error("Invalid contract operation: {0}")]
    UnknownOperation(String),

    /// The store failed while reading a key. Distinct from
    /// [`MissingValue`](Self::MissingValue) so the caller can retry rather
    /// than conclude the entity does not exist.
    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    StateReadFailed { key: String },

    /// The key is present with no value — a store miss.
    #[error("{{\"Error\":\"Nil amount for {key}\"}}")]
    MissingValue { key: String },

    /// Stored bytes did not parse as a base-10 integer. The contract never
    /// writes such values, so this indicates corrupt ledger state.
    #[error("{{\"Error\":\"Non-numeric amount for {key}\"}}")]
    CorruptValue { key: String },

    /// The store failed while deleting a key.
    #[error("Failed to delete state")]
    StateDeleteFailed,

    /// A store write failed; the platform's message is surfaced verbatim.
    #[error("{0}")]
    Platform(#[from] PlatformError),
}

/// Convenience result type for contract handlers.
pub type ContractResult<T> = Result<T, ContractError>;
