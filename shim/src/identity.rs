//! Caller identity and attribute resolution.
//!
//! The platform authenticates the invoker and resolves named attributes
//! from its credential; the contract only ever sees the resolved values.
//! The access gate consults this during `init` and nowhere else.

use std::collections::BTreeMap;

use keystone_primitives::PlatformError;

/// Attribute resolution for the authenticated caller of one invocation.
pub trait CallerIdentity {
    /// Look up a named attribute of the caller's credential.
    ///
    /// Returns `Ok(None)` if the credential carries no such attribute. An
    /// `Err` means the platform could not resolve the identity at all.
    fn attribute_value(&self, name: &str) -> Result<Option<String>, PlatformError>;
}

/// Fixed-attribute identity for tests and embedding.
///
/// Holds attributes in a `BTreeMap` for deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    attributes: BTreeMap<String, String>,
}

impl StaticIdentity {
    /// Create an identity with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, returning `self` for chaining.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an attribute in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }
}

impl CallerIdentity for StaticIdentity {
    fn attribute_value(&self, name: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.attributes.get(name).cloned())
    }
}
