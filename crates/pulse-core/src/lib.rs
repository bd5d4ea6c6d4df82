//! # pulse-core — Foundational Types for the Pulse Stack
//!
//! This crate is the bedrock of the Pulse monitoring stack. It defines the
//! core type-system primitives shared by every feature crate: validated
//! identifier newtypes, the service-type taxonomy with its capability and
//! alert-scope tables, and the read-only region catalog. Every other crate in
//! the workspace depends on `pulse-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`RegionId`] and
//!    [`ResourceId`] are newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **Single `ServiceType` enum.** One definition, seven variants,
//!    exhaustive `match` everywhere. Adding a service type forces every
//!    consumer (capability mapping, alert scopes, display labels) to handle
//!    it at compile time.
//!
//! 3. **Eligibility is one table.** The service-type → region-capability
//!    mapping lives in exactly one `match` ([`ServiceType::capability`]).
//!    Nothing else in the workspace compares capability strings.
//!
//! 4. **Catalog data is immutable.** [`Region`] entries come from the
//!    upstream regions endpoint and are never created or edited here;
//!    [`RegionCatalog`] only reads them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pulse-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests and the fixture-only
//!   `factories` module.
//! - All public types derive `Debug` and `Clone` and serialize with `serde`.

pub mod error;
pub mod identity;
pub mod region;
pub mod resource;
pub mod service;

#[cfg(any(test, feature = "factories"))]
pub mod factories;

// Re-export primary types for ergonomic imports.
pub use error::{CatalogError, ValidationError};
pub use identity::{RegionId, ResourceId};
pub use region::{Region, RegionCatalog};
pub use resource::{filter_by_service, Resource};
pub use service::{AlertScope, Capability, ServiceType, SERVICE_TYPE_COUNT};
