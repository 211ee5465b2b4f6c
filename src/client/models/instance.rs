//! Compute instance models

use serde::{Deserialize, Serialize};

/// A virtual server as reported by the portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Instance ID
    pub id: String,

    /// Instance name
    pub name: String,

    /// Power/state string, e.g. `ACTIVE` or `SHUTOFF`
    pub status: String,

    /// Primary IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Plan/flavor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    /// Region name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Owning project, present on admin-scope listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Instance {
    /// Whether the instance is currently running
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// Power actions the portal accepts for an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAction {
    Start,
    Stop,
    Reboot,
}

impl InstanceAction {
    /// Wire name for the action endpoint body
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceAction::Start => "start",
            InstanceAction::Stop => "stop",
            InstanceAction::Reboot => "reboot",
        }
    }
}

impl std::fmt::Display for InstanceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console access response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleAccess {
    pub console: ConsoleEndpoint,
}

/// The console endpoint itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleEndpoint {
    /// Browser URL for the noVNC session
    pub url: String,
}
