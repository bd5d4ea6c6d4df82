//! # Deterministic Fixtures
//!
//! Canned regions and resource builders for tests and examples. Compiled for
//! this crate's own tests and for downstream crates that enable the
//! `factories` feature in their dev-dependencies.
//!
//! Builders panic on malformed input instead of returning `Result` — fixture
//! data is developer-authored, and a typo should fail the test immediately.

use crate::identity::{RegionId, ResourceId};
use crate::region::Region;
use crate::resource::Resource;
use crate::service::{Capability, ServiceType};

/// Build a region entry from fixture data.
///
/// # Panics
///
/// Panics if `id` is not a valid region code.
pub fn region(id: &str, label: &str, country: &str, capabilities: &[Capability]) -> Region {
    let id = RegionId::new(id).expect("fixture region id must be valid");
    Region::new(id, label, country, capabilities.iter().copied())
}

/// Chicago: a fully built-out region advertising every capability.
pub fn chicago() -> Region {
    region(
        "us-ord",
        "Chicago, IL",
        "us",
        &[
            Capability::Linodes,
            Capability::ManagedDatabases,
            Capability::NodeBalancers,
            Capability::CloudFirewall,
            Capability::ObjectStorage,
            Capability::BlockStorage,
            Capability::Kubernetes,
        ],
    )
}

/// Newark: everything except managed databases.
pub fn newark() -> Region {
    region(
        "us-east",
        "Newark, NJ",
        "us",
        &[
            Capability::Linodes,
            Capability::NodeBalancers,
            Capability::CloudFirewall,
            Capability::ObjectStorage,
            Capability::BlockStorage,
            Capability::Kubernetes,
        ],
    )
}

/// London: compute, databases, load balancers, firewalls; no storage.
pub fn london() -> Region {
    region(
        "eu-west",
        "London, UK",
        "gb",
        &[
            Capability::Linodes,
            Capability::ManagedDatabases,
            Capability::NodeBalancers,
            Capability::CloudFirewall,
        ],
    )
}

/// Singapore: compute and storage only.
pub fn singapore() -> Region {
    region(
        "ap-south",
        "Singapore, SG",
        "sg",
        &[
            Capability::Linodes,
            Capability::ObjectStorage,
            Capability::BlockStorage,
        ],
    )
}

/// Build a resource entry from fixture data.
///
/// # Panics
///
/// Panics if `id` is empty or `region` is not a valid region code.
pub fn resource(
    id: &str,
    label: &str,
    region: Option<&str>,
    service_type: ServiceType,
) -> Resource {
    let id = ResourceId::new(id).expect("fixture resource id must be valid");
    let region = region.map(|code| RegionId::new(code).expect("fixture region code must be valid"));
    Resource::new(id, label, region, service_type)
}

/// Build `n` resources of one service type in one region, with sequential
/// ids like `dbaas-us-ord-1`.
pub fn resources_in(region: &Region, service_type: ServiceType, n: usize) -> Vec<Resource> {
    (1..=n)
        .map(|i| {
            resource(
                &format!("{}-{}-{i}", service_type.as_str(), region.id),
                &format!("{} {i}", service_type.label()),
                Some(region.id.as_str()),
                service_type,
            )
        })
        .collect()
}
