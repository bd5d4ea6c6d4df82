//! # Error Types
//!
//! Errors for the foundational types. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! The scoping pipeline itself is total over its inputs (empty lists, unknown
//! ids, and absent service filters all produce well-formed empty outputs), so
//! errors here arise only at the edges: parsing identifiers and taxonomy
//! strings from external payloads, and resolving ids against the catalog.

use thiserror::Error;

use crate::identity::RegionId;

/// Rejection of a malformed identifier or taxonomy string.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Region id is empty or contains characters outside `[a-z0-9-]`.
    #[error("invalid region id: {0:?}")]
    InvalidRegionId(String),

    /// Resource id is empty.
    #[error("invalid resource id: {0:?}")]
    InvalidResourceId(String),

    /// Service type string matches no known product category.
    #[error("unknown service type: {0:?}")]
    UnknownServiceType(String),

    /// Capability label matches no known region capability.
    #[error("unknown capability: {0:?}")]
    UnknownCapability(String),

    /// Alert scope string matches no known scoping granularity.
    #[error("unknown alert scope: {0:?}")]
    UnknownAlertScope(String),
}

/// Failure to resolve an id against the region catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The id is well-formed but the catalog has no such region.
    #[error("region {0} is not in the catalog")]
    UnknownRegion(RegionId),
}
