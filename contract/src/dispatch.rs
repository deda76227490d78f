//! Operation routing and the contract entry points.
//!
//! Dispatch is a pure exact-match mapping from operation name to handler;
//! it touches no state itself. Access requirements are declared per
//! operation and evaluated here before the handler runs, so the gate sits
//! in one place rather than inside individual handlers.

use core::fmt;

use keystone_primitives::{ContractError, Response, LOG_INFO};

use crate::access::{AccessRequirement, INIT_ACCESS};
use crate::handlers;
use crate::stub::LedgerStub;

/// The five named operations of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create or overwrite an entity. Gated.
    Init,
    /// Read an entity.
    Query,
    /// Overwrite an entity and return the re-read value.
    Update,
    /// Remove an entity.
    Delete,
    /// Write the same value repeatedly.
    PutMultiple,
}

impl Operation {
    /// Exact-match lookup of an operation by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "init" => Some(Self::Init),
            "query" => Some(Self::Query),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            "putMultiple" => Some(Self::PutMultiple),
            _ => None,
        }
    }

    /// The operation's wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Query => "query",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::PutMultiple => "putMultiple",
        }
    }

    /// The access requirement evaluated before this operation runs.
    ///
    /// Only `Init` declares one; the other operations are deliberately
    /// ungated. Gating another operation means returning `Some` here.
    pub fn access_requirement(self) -> Option<&'static AccessRequirement> {
        match self {
            Self::Init => Some(&INIT_ACCESS),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The contract: stateless dispatch over an injected stub.
///
/// All state is accessed through the `LedgerStub`, so given the same
/// invocation and the same ledger state, every node produces the same
/// response.
pub struct LedgerContract;

impl LedgerContract {
    /// Platform entry point for contract instantiation.
    ///
    /// Routes through the same path as `invoke("init", ...)`, including
    /// the access gate.
    pub fn init(stub: &mut dyn LedgerStub, args: &[String]) -> Response {
        Self::run(Operation::Init, stub, args)
    }

    /// Platform entry point for a routed invocation.
    ///
    /// Unknown operation names fail without touching state, naming the
    /// offending string.
    pub fn invoke(stub: &mut dyn LedgerStub, operation: &str, args: &[String]) -> Response {
        match Operation::from_name(operation) {
            Some(op) => Self::run(op, stub, args),
            None => Response::failure(
                ContractError::UnknownOperation(operation.to_string()).to_string(),
            ),
        }
    }

    /// Gate, dispatch, and convert the handler result into a `Response`.
    fn run(op: Operation, stub: &mut dyn LedgerStub, args: &[String]) -> Response {
        stub.log(LOG_INFO, &format!("contract invoked: {}", op));

        if let Some(requirement) = op.access_requirement() {
            if let Err(err) = requirement.check(stub) {
                return Response::failure(err.to_string());
            }
        }

        let result = match op {
            Operation::Init => handlers::init(stub, args),
            Operation::Query => handlers::query(stub, args),
            Operation::Update => handlers::update(stub, args),
            Operation::Delete => handlers::delete(stub, args),
            Operation::PutMultiple => handlers::put_multiple(stub, args),
        };

        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => Response::failure(err.to_string()),
        }
    }
}
