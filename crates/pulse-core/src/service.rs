//! # Service Taxonomy — Single Source of Truth
//!
//! Defines the [`ServiceType`] enum with all seven monitored product
//! categories, the [`Capability`] labels regions advertise, and the static
//! tables tying them together. This is the ONE definition used across the
//! entire stack. Every `match` on [`ServiceType`] must be exhaustive —
//! adding a new service forces every consumer to handle it at compile time.
//!
//! ## Eligibility Invariant
//!
//! Whether an alert for a given service may target a given region is decided
//! by exactly one rule: the region advertises
//! [`ServiceType::capability`]`(service)` among its monitor capabilities.
//! Keeping the mapping in a single exhaustive `match` makes the eligibility
//! filter one auditable table instead of string comparisons scattered through
//! the code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// All product categories for which telemetry and alerting are offered.
///
/// The wire identifiers are the lowercase tags used by the monitoring
/// endpoints (`"dbaas"`, `"nodebalancer"`, ...). They are not guessable from
/// the display labels — `"lke"` renders as `"LKE"` but `"dbaas"` renders as
/// `"Databases"` — so both directions live here as explicit tables.
///
/// # Services
///
/// | Wire id | Label | Region capability |
/// |---------|-------|-------------------|
/// | `linode` | Linode | Linodes |
/// | `dbaas` | Databases | Managed Databases |
/// | `nodebalancer` | NodeBalancers | NodeBalancers |
/// | `firewall` | Firewalls | Cloud Firewall |
/// | `objectstorage` | Object Storage | Object Storage |
/// | `blockstorage` | Block Storage | Block Storage |
/// | `lke` | LKE | Kubernetes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Compute instances.
    Linode,
    /// Managed databases (MySQL, PostgreSQL clusters).
    Dbaas,
    /// Load balancers.
    Nodebalancer,
    /// Cloud firewalls.
    Firewall,
    /// S3-compatible object storage buckets.
    ObjectStorage,
    /// Block storage volumes.
    BlockStorage,
    /// Managed Kubernetes clusters.
    Lke,
}

/// Total number of service types. Used for compile-time assertions.
pub const SERVICE_TYPE_COUNT: usize = 7;

impl ServiceType {
    /// Returns all seven service types in canonical order.
    pub fn all() -> &'static [ServiceType] {
        &[
            Self::Linode,
            Self::Dbaas,
            Self::Nodebalancer,
            Self::Firewall,
            Self::ObjectStorage,
            Self::BlockStorage,
            Self::Lke,
        ]
    }

    /// Returns the lowercase wire identifier for this service type.
    ///
    /// This must match the serde serialization format and the tags the
    /// monitoring endpoints use in request paths and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linode => "linode",
            Self::Dbaas => "dbaas",
            Self::Nodebalancer => "nodebalancer",
            Self::Firewall => "firewall",
            Self::ObjectStorage => "objectstorage",
            Self::BlockStorage => "blockstorage",
            Self::Lke => "lke",
        }
    }

    /// Returns the human-readable product label shown in service pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linode => "Linode",
            Self::Dbaas => "Databases",
            Self::Nodebalancer => "NodeBalancers",
            Self::Firewall => "Firewalls",
            Self::ObjectStorage => "Object Storage",
            Self::BlockStorage => "Block Storage",
            Self::Lke => "LKE",
        }
    }

    /// Returns the region capability a region must advertise for this
    /// service's alerts to target it.
    ///
    /// This is the eligibility table. It is the only place in the workspace
    /// where service types and capabilities are related.
    pub fn capability(&self) -> Capability {
        match self {
            Self::Linode => Capability::Linodes,
            Self::Dbaas => Capability::ManagedDatabases,
            Self::Nodebalancer => Capability::NodeBalancers,
            Self::Firewall => Capability::CloudFirewall,
            Self::ObjectStorage => Capability::ObjectStorage,
            Self::BlockStorage => Capability::BlockStorage,
            Self::Lke => Capability::Kubernetes,
        }
    }

    /// Returns the scoping granularities alert rules support for this
    /// service, in coarsest-last order.
    pub fn alert_scopes(&self) -> &'static [AlertScope] {
        match self {
            Self::Linode | Self::Dbaas | Self::Nodebalancer | Self::Lke => &[AlertScope::Entity],
            Self::Firewall => &[AlertScope::Entity, AlertScope::Account],
            Self::ObjectStorage | Self::BlockStorage => {
                &[AlertScope::Entity, AlertScope::Region, AlertScope::Account]
            }
        }
    }

    /// Whether alert rules for this service can be scoped to whole regions.
    pub fn supports_region_scope(&self) -> bool {
        self.alert_scopes().contains(&AlertScope::Region)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    /// Parse a service type from its lowercase wire identifier.
    ///
    /// Accepts the same identifiers produced by [`ServiceType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linode" => Ok(Self::Linode),
            "dbaas" => Ok(Self::Dbaas),
            "nodebalancer" => Ok(Self::Nodebalancer),
            "firewall" => Ok(Self::Firewall),
            "objectstorage" => Ok(Self::ObjectStorage),
            "blockstorage" => Ok(Self::BlockStorage),
            "lke" => Ok(Self::Lke),
            other => Err(ValidationError::UnknownServiceType(other.to_string())),
        }
    }
}

/// Capability labels regions advertise in their catalog entries.
///
/// The wire form is the human-readable label the regions endpoint serves
/// (`"Managed Databases"`, `"Cloud Firewall"`), so serde renames are explicit
/// per variant rather than derived from the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    /// Region can host compute instances.
    #[serde(rename = "Linodes")]
    Linodes,
    /// Region can host managed database clusters.
    #[serde(rename = "Managed Databases")]
    ManagedDatabases,
    /// Region can host load balancers.
    #[serde(rename = "NodeBalancers")]
    NodeBalancers,
    /// Region supports cloud firewalls.
    #[serde(rename = "Cloud Firewall")]
    CloudFirewall,
    /// Region has an object storage cluster.
    #[serde(rename = "Object Storage")]
    ObjectStorage,
    /// Region can attach block storage volumes.
    #[serde(rename = "Block Storage")]
    BlockStorage,
    /// Region can host managed Kubernetes clusters.
    #[serde(rename = "Kubernetes")]
    Kubernetes,
}

impl Capability {
    /// Returns all capabilities in canonical order.
    pub fn all() -> &'static [Capability] {
        &[
            Self::Linodes,
            Self::ManagedDatabases,
            Self::NodeBalancers,
            Self::CloudFirewall,
            Self::ObjectStorage,
            Self::BlockStorage,
            Self::Kubernetes,
        ]
    }

    /// Returns the capability label as served by the regions endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linodes => "Linodes",
            Self::ManagedDatabases => "Managed Databases",
            Self::NodeBalancers => "NodeBalancers",
            Self::CloudFirewall => "Cloud Firewall",
            Self::ObjectStorage => "Object Storage",
            Self::BlockStorage => "Block Storage",
            Self::Kubernetes => "Kubernetes",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ValidationError;

    /// Parse a capability from its catalog label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linodes" => Ok(Self::Linodes),
            "Managed Databases" => Ok(Self::ManagedDatabases),
            "NodeBalancers" => Ok(Self::NodeBalancers),
            "Cloud Firewall" => Ok(Self::CloudFirewall),
            "Object Storage" => Ok(Self::ObjectStorage),
            "Block Storage" => Ok(Self::BlockStorage),
            "Kubernetes" => Ok(Self::Kubernetes),
            other => Err(ValidationError::UnknownCapability(other.to_string())),
        }
    }
}

/// Granularity at which an alert rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertScope {
    /// The rule targets individual resources.
    Entity,
    /// The rule targets every resource in the selected regions.
    Region,
    /// The rule targets the whole account.
    Account,
}

impl AlertScope {
    /// Returns the lowercase wire identifier for this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Region => "region",
            Self::Account => "account",
        }
    }
}

impl std::fmt::Display for AlertScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertScope {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entity" => Ok(Self::Entity),
            "region" => Ok(Self::Region),
            "account" => Ok(Self::Account),
            other => Err(ValidationError::UnknownAlertScope(other.to_string())),
        }
    }
}
