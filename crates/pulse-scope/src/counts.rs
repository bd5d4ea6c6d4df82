//! # Per-Region Resource Counts
//!
//! First stage of the scoping pipeline: collapse a flat resource list into a
//! region → count map. The counts drive the "N resources" column of the
//! region picker; they never gate eligibility (a region with zero matching
//! resources is still selectable if it advertises the capability).
//!
//! Resources without a region are skipped. Region ids that no catalog entry
//! matches still get counted here — whether an id names a known region is
//! resolved by the merge stage, which only emits rows for cataloged regions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pulse_core::{filter_by_service, RegionId, Resource, ServiceType};

/// Region → resource-count map with deterministic iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCounts {
    counts: BTreeMap<RegionId, usize>,
}

impl RegionCounts {
    /// Group a resource list by region.
    ///
    /// Resources whose `region` is `None` are ignored. Never fails; an empty
    /// input yields an empty map.
    pub fn from_resources(resources: &[Resource]) -> Self {
        Self::tally(resources)
    }

    /// Group by region, counting only resources of the given service type.
    ///
    /// `None` counts everything, mirroring the "all services" dashboard
    /// state. Useful when the caller holds a mixed-service resource list
    /// instead of one pre-filtered by the resources endpoint.
    pub fn for_service(resources: &[Resource], service: Option<ServiceType>) -> Self {
        Self::tally(filter_by_service(resources, service))
    }

    fn tally<'a>(resources: impl IntoIterator<Item = &'a Resource>) -> Self {
        let mut counts = BTreeMap::new();
        for resource in resources {
            if let Some(region) = &resource.region {
                *counts.entry(region.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for a region; absent regions count zero.
    pub fn get(&self, id: &RegionId) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Number of regions with at least one resource.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no resource carried a region.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(region, count)` pairs in region-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, usize)> {
        self.counts.iter().map(|(region, count)| (region, *count))
    }

    /// Total resources counted across all regions.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl FromIterator<(RegionId, usize)> for RegionCounts {
    /// Collect explicit pairs; duplicate regions sum.
    fn from_iter<I: IntoIterator<Item = (RegionId, usize)>>(pairs: I) -> Self {
        let mut counts = BTreeMap::new();
        for (region, count) in pairs {
            *counts.entry(region).or_insert(0) += count;
        }
        Self { counts }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use pulse_core::ResourceId;

    fn region_id() -> impl Strategy<Value = RegionId> {
        "[a-z]{2}-[a-z]{3,6}".prop_map(|code| RegionId::new(code).unwrap())
    }

    fn resource_entry() -> impl Strategy<Value = Resource> {
        (
            "[a-z0-9]{1,8}",
            proptest::option::of(region_id()),
            proptest::sample::select(ServiceType::all().to_vec()),
        )
            .prop_map(|(id, region, service_type)| {
                Resource::new(
                    ResourceId::new(format!("r-{id}")).unwrap(),
                    format!("label-{id}"),
                    region,
                    service_type,
                )
            })
    }

    proptest! {
        /// The count for every region equals the number of resources naming
        /// that region.
        #[test]
        fn count_matches_manual_tally(resources in prop::collection::vec(resource_entry(), 0..40)) {
            let counts = RegionCounts::from_resources(&resources);
            for (region, count) in counts.iter() {
                let expected = resources
                    .iter()
                    .filter(|r| r.region.as_ref() == Some(region))
                    .count();
                prop_assert_eq!(count, expected);
            }
        }

        /// Every counted resource carries a region: the grand total equals
        /// the number of region-bearing resources.
        #[test]
        fn total_counts_region_bearing_resources(
            resources in prop::collection::vec(resource_entry(), 0..40)
        ) {
            let counts = RegionCounts::from_resources(&resources);
            let with_region = resources.iter().filter(|r| r.region.is_some()).count();
            prop_assert_eq!(counts.total(), with_region);
        }

        /// Service-scoped counting agrees with filtering first.
        #[test]
        fn for_service_equals_prefilter(
            resources in prop::collection::vec(resource_entry(), 0..40),
            service in proptest::sample::select(ServiceType::all().to_vec()),
        ) {
            let scoped = RegionCounts::for_service(&resources, Some(service));
            let filtered: Vec<Resource> = resources
                .iter()
                .filter(|r| r.service_type == service)
                .cloned()
                .collect();
            prop_assert_eq!(scoped, RegionCounts::from_resources(&filtered));
        }
    }
}
