//! # Regions and the Region Catalog
//!
//! [`Region`] is a read-only entry from the upstream regions endpoint: the
//! short code, display label, country, and the set of capabilities the
//! region's monitoring plane advertises. [`RegionCatalog`] wraps the fetched
//! list and answers lookups; nothing in this crate ever creates or edits a
//! region.
//!
//! Catalog order is preserved as fetched — the endpoint serves a curated
//! order and any display-time sorting belongs to presentation code.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::identity::RegionId;
use crate::service::{Capability, ServiceType};

/// A geographic deployment region as described by the regions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Short region code (`"us-ord"`).
    pub id: RegionId,
    /// Display label (`"Chicago, IL"`).
    pub label: String,
    /// ISO country code of the data center (`"us"`).
    pub country: String,
    /// Capabilities the region's monitoring plane advertises. Alert
    /// eligibility for a service is membership of that service's capability
    /// in this set.
    pub monitor_capabilities: BTreeSet<Capability>,
}

impl Region {
    /// Assemble a region entry.
    pub fn new(
        id: RegionId,
        label: impl Into<String>,
        country: impl Into<String>,
        monitor_capabilities: impl IntoIterator<Item = Capability>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            country: country.into(),
            monitor_capabilities: monitor_capabilities.into_iter().collect(),
        }
    }

    /// Whether the region advertises the given capability.
    pub fn has_monitor_capability(&self, capability: Capability) -> bool {
        self.monitor_capabilities.contains(&capability)
    }

    /// Whether alerts for the given service may target this region.
    ///
    /// Delegates to the single service → capability table in
    /// [`ServiceType::capability`].
    pub fn monitors_service(&self, service: ServiceType) -> bool {
        self.has_monitor_capability(service.capability())
    }

    /// The label used by region pickers: `"Chicago, IL (us-ord)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.id)
    }
}

/// The fetched region list, deduplicated by id.
///
/// Construction keeps the first occurrence of a duplicated id and logs the
/// rest; the upstream endpoint should never serve duplicates, but a malformed
/// payload must not corrupt lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Build a catalog from a fetched region list, dropping duplicate ids.
    pub fn from_regions(regions: Vec<Region>) -> Self {
        let mut seen = BTreeSet::new();
        let mut kept = Vec::with_capacity(regions.len());
        for region in regions {
            if seen.insert(region.id.clone()) {
                kept.push(region);
            } else {
                tracing::warn!(
                    region = %region.id,
                    "duplicate region id in catalog payload, keeping first occurrence"
                );
            }
        }
        Self { regions: kept }
    }

    /// Look up a region by id.
    pub fn get(&self, id: &RegionId) -> Option<&Region> {
        self.regions.iter().find(|region| &region.id == id)
    }

    /// Look up a region by id, failing if the catalog has no such region.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownRegion`] when the id resolves to
    /// nothing.
    pub fn require(&self, id: &RegionId) -> Result<&Region, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownRegion(id.clone()))
    }

    /// Look up a region by display label, ignoring ASCII case.
    pub fn get_by_label(&self, label: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| region.label.eq_ignore_ascii_case(label))
    }

    /// Whether the catalog knows the given id.
    pub fn contains(&self, id: &RegionId) -> bool {
        self.get(id).is_some()
    }

    /// Regions advertising the given capability, in catalog order.
    pub fn with_capability(&self, capability: Capability) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|region| region.has_monitor_capability(capability))
            .collect()
    }

    /// Number of regions in the catalog.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate regions in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// The regions as a slice, in catalog order.
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }
}

impl<'de> Deserialize<'de> for RegionCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let regions = Vec::<Region>::deserialize(deserializer)?;
        Ok(Self::from_regions(regions))
    }
}
