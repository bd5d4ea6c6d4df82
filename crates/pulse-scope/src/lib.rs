//! # pulse-scope — Region Scoping for Alert Definitions
//!
//! The pure pipeline behind the "which regions does this alert apply to?"
//! picker. Given the fetched region catalog and resource list, it produces
//! the selectable rows, tracks the user's selection, and derives the rows
//! actually rendered:
//!
//! ```text
//! resources ──► RegionCounts ──┐
//! regions ─────────────────────┼──► merge_region_availability ──► rows
//! selection (controller) ──────┘            │
//!                                           ▼
//!                              PresentationFilter / sort / paginate
//! ```
//!
//! Every stage is synchronous and pure; the only mutable state is the
//! selection, owned by [`SelectionController`] and replaced (never edited in
//! place) on each operation. Counts and rows are recomputed from scratch per
//! render, and the selection feeds back into the merge — there is no cache
//! to invalidate. Fetching regions and resources, loading states, and
//! persisting the chosen ids all belong to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use pulse_core::{Capability, Region, RegionId, Resource, ResourceId, ServiceType};
//! use pulse_scope::{scope_rows, PresentationFilter, RegionSelection};
//!
//! let regions = vec![Region::new(
//!     RegionId::new("us-ord").unwrap(),
//!     "Chicago, IL",
//!     "us",
//!     [Capability::ManagedDatabases],
//! )];
//! let resources = vec![Resource::new(
//!     ResourceId::new("42").unwrap(),
//!     "prod-db",
//!     Some(RegionId::new("us-ord").unwrap()),
//!     ServiceType::Dbaas,
//! )];
//!
//! let selection = RegionSelection::new().select(RegionId::new("us-ord").unwrap());
//! let rows = scope_rows(&regions, &resources, &selection, Some(ServiceType::Dbaas));
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].count, 1);
//! assert!(rows[0].checked);
//!
//! let visible = PresentationFilter::new("chi", false).apply(&rows);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod availability;
pub mod counts;
pub mod presentation;
pub mod selection;

// Re-export primary types for ergonomic imports.
pub use availability::{eligible_region_ids, merge_region_availability, RegionAvailability};
pub use counts::RegionCounts;
pub use presentation::{paginate, sort_rows_by_label, Page, PageView, PresentationFilter};
pub use selection::{RegionSelection, SelectionController, SelectionObserver};

use pulse_core::{Region, Resource, ServiceType};

/// One-shot counts-plus-merge for a single render.
///
/// Counts resources (restricted to `service` when given, so a mixed-service
/// list behaves like one pre-filtered by the resources endpoint) and joins
/// them with the regions and the current selection. Equivalent to calling
/// [`RegionCounts::for_service`] followed by [`merge_region_availability`].
pub fn scope_rows(
    regions: &[Region],
    resources: &[Resource],
    selection: &RegionSelection,
    service: Option<ServiceType>,
) -> Vec<RegionAvailability> {
    let counts = RegionCounts::for_service(resources, service);
    merge_region_availability(regions, &counts, selection, service)
}
