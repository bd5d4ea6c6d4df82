//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the Pulse stack.
//! Each identifier is a distinct type — you cannot pass a [`ResourceId`]
//! where a [`RegionId`] is expected.
//!
//! ## Validation
//!
//! Both identifiers validate at construction time. [`RegionId`] enforces the
//! short-code format the regions endpoint uses (`"us-ord"`, `"eu-west"`);
//! [`ResourceId`] is opaque and only required to be non-empty, because
//! resource ids are assigned by each service's own API (numeric for compute
//! instances, names for buckets).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Short code of a geographic deployment region (`"us-ord"`, `"ap-south"`).
///
/// # Validation
///
/// - Must be non-empty
/// - ASCII lowercase letters, digits, and `-` only
///
/// The format check is intentionally loose: it admits every region code the
/// platform has ever issued without hardcoding the current catalog. Whether a
/// well-formed id names a *known* region is a separate question answered by
/// [`crate::region::RegionCatalog`].
///
/// `Ord` is lexicographic over the code, so ordered collections of region ids
/// iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionId(String);

impl_validating_deserialize!(RegionId);

impl RegionId {
    /// Create a region id from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegionId`] if the string is empty or
    /// contains characters outside `[a-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty()
            || !s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::InvalidRegionId(s));
        }
        Ok(Self(s))
    }

    /// Access the region code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RegionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of a billable managed entity (database, bucket, cluster).
///
/// # Validation
///
/// - Must be non-empty after trimming ASCII whitespace
/// - Stored trimmed
///
/// No format beyond that is enforced: each service mints its own id shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceId(String);

impl_validating_deserialize!(ResourceId);

impl ResourceId {
    /// Create a resource id from a string, validating that it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidResourceId`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidResourceId(s));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the resource id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ResourceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
