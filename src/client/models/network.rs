//! Network, port, and floating IP models

use serde::{Deserialize, Serialize};

/// A tenant network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Network ID
    pub id: String,

    /// Network name
    pub name: String,

    /// Operational status, e.g. `ACTIVE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the network is shared across projects
    #[serde(default)]
    pub shared: bool,

    /// Administrative up/down state
    #[serde(default)]
    pub admin_state_up: bool,

    /// Subnet identifiers attached to the network
    #[serde(default)]
    pub subnets: Vec<String>,
}

/// Request body for creating a network with one subnet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNetworkRequest {
    pub name: String,

    /// Subnet range in CIDR notation
    pub cidr: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ip: Option<String>,

    pub enable_dhcp: bool,
}

/// A port on a network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// Port ID
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Addresses bound to the port
    #[serde(default)]
    pub ip_addresses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Owner kind, e.g. `compute:nova`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_owner: Option<String>,

    /// Owning device (instance) ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// A floating IP and its current attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingIp {
    /// Floating IP ID, used for assign/release operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The public address
    pub ip_address: String,

    /// Fixed address it currently maps to, if attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_ip: Option<String>,

    /// Name of the instance it is attached to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One address entry in the project IP inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpAllocation {
    /// The address
    pub ip: String,

    /// Fixed address a floating entry maps to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_ip: Option<String>,

    /// Device the address is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// IP protocol version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
}

/// All addresses allocated to the current project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpInventory {
    #[serde(default)]
    pub floating_ips: Vec<IpAllocation>,

    #[serde(default)]
    pub fixed_ips: Vec<IpAllocation>,
}
