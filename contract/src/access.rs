//! Attribute-based access gating.
//!
//! Gating is declarative: an operation declares an [`AccessRequirement`]
//! and the dispatcher evaluates it before the handler runs. Only `init`
//! declares one — the other operations are intentionally ungated, and the
//! asymmetry is preserved behavior, not an oversight to fix here.
//!
//! Denial messages are surfaced to the caller verbatim so it can see
//! exactly which check failed.

use keystone_primitives::{ContractError, ContractResult};

use crate::stub::LedgerStub;

/// A declared attribute/value pair the caller must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequirement {
    /// Attribute name looked up in the caller's credential.
    pub attribute: &'static str,
    /// Exact value the attribute must equal.
    pub value: &'static str,
}

/// Requirement evaluated before `init`: the caller's credential must carry
/// `sampleChainCode.init = "true"`.
pub const INIT_ACCESS: AccessRequirement = AccessRequirement {
    attribute: "sampleChainCode.init",
    value: "true",
};

impl AccessRequirement {
    /// Check this requirement against the invocation's caller.
    pub fn check(&self, stub: &dyn LedgerStub) -> ContractResult<()> {
        assert_attribute_value(stub, self.attribute, self.value)
    }
}

/// Require that the caller carries attribute `name` with exactly `value`.
///
/// Passes silently on an exact match. Any other outcome — attribute
/// absent, attribute present with a different value, or the platform
/// failing to resolve the identity — is an access denial.
pub fn assert_attribute_value(
    stub: &dyn LedgerStub,
    name: &str,
    value: &str,
) -> ContractResult<()> {
    let actual = stub
        .attribute_value(name)
        .map_err(|err| ContractError::AccessDenied(err.to_string()))?;

    match actual {
        None => Err(ContractError::AccessDenied(format!(
            "attribute '{}' was not found",
            name
        ))),
        Some(got) if got != value => Err(ContractError::AccessDenied(format!(
            "attribute '{}' equals '{}', not '{}'",
            name, got, value
        ))),
        Some(_) => Ok(()),
    }
}
