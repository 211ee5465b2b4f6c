//! Usage and capacity models

use serde::{Deserialize, Serialize};

/// A used/limit pair for one resource class
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UsagePair {
    #[serde(default)]
    pub used: f64,

    #[serde(default)]
    pub limit: f64,
}

impl UsagePair {
    /// Utilization as a percentage, zero when no limit is set
    pub fn percent(&self) -> f64 {
        if self.limit <= 0.0 {
            0.0
        } else {
            self.used / self.limit * 100.0
        }
    }
}

/// Project quota usage. RAM is reported in MiB, storage in GiB.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceLimits {
    #[serde(default)]
    pub cpu: UsagePair,

    #[serde(default)]
    pub ram: UsagePair,

    #[serde(default)]
    pub storage: UsagePair,
}

/// Server counts for the current project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCounts {
    #[serde(default)]
    pub total_servers: u64,

    #[serde(default)]
    pub online_servers: u64,

    #[serde(default)]
    pub offline_servers: u64,
}

/// Platform-wide rollup for administrators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminSummary {
    #[serde(default)]
    pub total_instances: u64,

    #[serde(default)]
    pub max_instances: u64,

    #[serde(default)]
    pub floating_ips_used: u64,

    #[serde(default)]
    pub floating_ips_total: u64,
}
