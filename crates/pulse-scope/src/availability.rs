//! # Region Availability Merge
//!
//! Second stage of the scoping pipeline: join the fetched region list with
//! per-region counts and the current selection into the row view-model every
//! downstream view consumes.
//!
//! Rows are rebuilt from scratch on every call — the merge is a pure function
//! of its inputs and no row is ever mutated in place. Input (catalog) order
//! is preserved; sorting belongs to the presentation stage.

use serde::{Deserialize, Serialize};

use pulse_core::{Region, RegionId, ServiceType};

use crate::counts::RegionCounts;
use crate::selection::RegionSelection;

/// One selectable region row: id, display label, matching-resource count,
/// and whether it is currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAvailability {
    /// Region the row describes.
    pub region: RegionId,
    /// Display label of the region.
    pub label: String,
    /// Number of matching resources in the region. Zero is a normal value,
    /// not an eligibility gate.
    pub count: usize,
    /// Whether the region is in the current selection.
    pub checked: bool,
}

impl RegionAvailability {
    /// The label used by region pickers: `"Chicago, IL (us-ord)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.region)
    }
}

/// Join regions, counts, and the selection into availability rows.
///
/// Eligibility: with `Some(service)`, a region appears only if it advertises
/// that service's capability (one table, [`ServiceType::capability`]); with
/// `None`, every region appears. A service no region supports yields an
/// empty vector, which callers render as an empty state rather than an
/// error.
///
/// Selected ids that match no region produce no row — dangling selection
/// entries are tolerated in the set but never surfaced as checked rows.
pub fn merge_region_availability(
    regions: &[Region],
    counts: &RegionCounts,
    selection: &RegionSelection,
    service: Option<ServiceType>,
) -> Vec<RegionAvailability> {
    regions
        .iter()
        .filter(|region| match service {
            None => true,
            Some(service) => region.monitors_service(service),
        })
        .map(|region| RegionAvailability {
            region: region.id.clone(),
            label: region.label.clone(),
            count: counts.get(&region.id),
            checked: selection.contains(&region.id),
        })
        .collect()
}

/// The ids of the given rows, in row order.
///
/// This is the `eligible` argument select-all and deselect-all expect: the
/// rows the user is currently shown.
pub fn eligible_region_ids(rows: &[RegionAvailability]) -> Vec<RegionId> {
    rows.iter().map(|row| row.region.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::factories;

    fn id(code: &str) -> RegionId {
        RegionId::new(code).unwrap()
    }

    #[test]
    fn service_filter_keeps_capable_regions_only() {
        let regions = vec![factories::chicago(), factories::newark(), factories::london()];
        let rows = merge_region_availability(
            &regions,
            &RegionCounts::default(),
            &RegionSelection::new(),
            Some(ServiceType::Dbaas),
        );
        let ids: Vec<&str> = rows.iter().map(|row| row.region.as_str()).collect();
        assert_eq!(ids, vec!["us-ord", "eu-west"]); // Newark lacks Managed Databases
    }

    #[test]
    fn no_service_filter_includes_every_region() {
        let regions = vec![factories::chicago(), factories::newark(), factories::singapore()];
        let rows = merge_region_availability(
            &regions,
            &RegionCounts::default(),
            &RegionSelection::new(),
            None,
        );
        assert_eq!(rows.len(), regions.len());
    }

    #[test]
    fn counts_default_to_zero() {
        let regions = vec![factories::chicago()];
        let counts: RegionCounts = vec![(id("us-east"), 4)].into_iter().collect();
        let rows =
            merge_region_availability(&regions, &counts, &RegionSelection::new(), None);
        assert_eq!(rows[0].count, 0);
    }

    #[test]
    fn counts_and_checked_come_from_inputs() {
        let regions = vec![factories::chicago(), factories::london()];
        let counts: RegionCounts = vec![(id("us-ord"), 3)].into_iter().collect();
        let selection = RegionSelection::new().select(id("eu-west"));
        let rows = merge_region_availability(&regions, &counts, &selection, None);
        assert_eq!(rows[0].region.as_str(), "us-ord");
        assert_eq!(rows[0].count, 3);
        assert!(!rows[0].checked);
        assert_eq!(rows[1].region.as_str(), "eu-west");
        assert_eq!(rows[1].count, 0);
        assert!(rows[1].checked);
    }

    #[test]
    fn dangling_selection_never_surfaces() {
        let regions = vec![factories::chicago()];
        let selection = RegionSelection::new().select(id("gone-region"));
        let rows =
            merge_region_availability(&regions, &RegionCounts::default(), &selection, None);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].checked);
    }

    #[test]
    fn unsupported_service_yields_empty_rows() {
        let regions = vec![factories::london()]; // no storage capabilities
        let rows = merge_region_availability(
            &regions,
            &RegionCounts::default(),
            &RegionSelection::new(),
            Some(ServiceType::ObjectStorage),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_region_list_yields_empty_rows() {
        let rows = merge_region_availability(
            &[],
            &RegionCounts::default(),
            &RegionSelection::new(),
            None,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn input_order_is_preserved() {
        let regions = vec![factories::singapore(), factories::chicago(), factories::newark()];
        let rows = merge_region_availability(
            &regions,
            &RegionCounts::default(),
            &RegionSelection::new(),
            None,
        );
        let ids: Vec<&str> = rows.iter().map(|row| row.region.as_str()).collect();
        assert_eq!(ids, vec!["ap-south", "us-ord", "us-east"]);
    }

    #[test]
    fn eligible_region_ids_in_row_order() {
        let regions = vec![factories::chicago(), factories::london()];
        let rows = merge_region_availability(
            &regions,
            &RegionCounts::default(),
            &RegionSelection::new(),
            Some(ServiceType::Dbaas),
        );
        let ids = eligible_region_ids(&rows);
        assert_eq!(ids, vec![id("us-ord"), id("eu-west")]);
    }

    #[test]
    fn display_label_appends_code() {
        let row = RegionAvailability {
            region: id("us-ord"),
            label: "Chicago, IL".to_string(),
            count: 0,
            checked: false,
        };
        assert_eq!(row.display_label(), "Chicago, IL (us-ord)");
    }

    #[test]
    fn merge_is_pure_across_calls() {
        let regions = vec![factories::chicago()];
        let counts: RegionCounts = vec![(id("us-ord"), 1)].into_iter().collect();
        let selection = RegionSelection::new();
        let first = merge_region_availability(&regions, &counts, &selection, None);
        let second = merge_region_availability(&regions, &counts, &selection, None);
        assert_eq!(first, second);
    }
}
