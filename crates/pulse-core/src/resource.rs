//! # Resources
//!
//! A [`Resource`] is a billable managed entity (database cluster, bucket,
//! volume) as reported by the resources endpoint. Resources are read-only
//! inputs here: the scoping pipeline only groups and counts them.
//!
//! The `region` field is optional because some payloads legitimately omit it
//! (resources mid-provisioning, account-wide pseudo-resources). Downstream
//! grouping skips such resources rather than failing.

use serde::{Deserialize, Serialize};

use crate::identity::{RegionId, ResourceId};
use crate::service::ServiceType;

/// A managed entity belonging to at most one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Service-assigned identifier.
    pub id: ResourceId,
    /// Display label.
    pub label: String,
    /// Region the resource lives in, when the payload reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionId>,
    /// Product category the resource belongs to.
    pub service_type: ServiceType,
}

impl Resource {
    /// Assemble a resource entry.
    pub fn new(
        id: ResourceId,
        label: impl Into<String>,
        region: Option<RegionId>,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            region,
            service_type,
        }
    }
}

/// Restrict a resource list to one service type.
///
/// `None` applies no filtering, mirroring the dashboards' "all services"
/// state. Returns references in input order.
pub fn filter_by_service(
    resources: &[Resource],
    service: Option<ServiceType>,
) -> Vec<&Resource> {
    match service {
        None => resources.iter().collect(),
        Some(wanted) => resources
            .iter()
            .filter(|resource| resource.service_type == wanted)
            .collect(),
    }
}
