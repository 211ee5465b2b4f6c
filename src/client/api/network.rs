//! Network and floating IP API

use async_trait::async_trait;
use serde_json::json;

use crate::client::models::{
    CreateNetworkRequest, FloatingIp, IpInventory, Network, Port, StatusMessage,
};
use crate::client::portal::{PortalClient, RequestAttempt};
use crate::error::Result;

/// Network operations for the portal API
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// List the project's networks
    async fn list_networks(&self) -> Result<Vec<Network>>;

    /// Create a network with one subnet
    async fn create_network(&self, request: &CreateNetworkRequest) -> Result<StatusMessage>;

    /// List the ports attached to a network
    async fn list_ports(&self, network_id: &str) -> Result<Vec<Port>>;

    /// List the project's floating IPs
    async fn list_floating_ips(&self) -> Result<Vec<FloatingIp>>;

    /// Every floating and fixed IP allocated to the project
    async fn ip_inventory(&self) -> Result<IpInventory>;

    /// Allocate a new floating IP from the pool
    async fn allocate_floating_ip(&self) -> Result<StatusMessage>;

    /// Attach a floating IP to an instance
    async fn assign_floating_ip(&self, ip_id: &str, vm_id: &str) -> Result<StatusMessage>;

    /// Detach a floating IP from its instance
    async fn unassign_floating_ip(&self, ip_id: &str) -> Result<StatusMessage>;

    /// Return a floating IP to the pool
    async fn release_floating_ip(&self, ip_id: &str) -> Result<StatusMessage>;
}

#[async_trait]
impl NetworkApi for PortalClient {
    async fn list_networks(&self) -> Result<Vec<Network>> {
        self.send(RequestAttempt::get("/openstack/network/network-list/"))
            .await
    }

    async fn create_network(&self, request: &CreateNetworkRequest) -> Result<StatusMessage> {
        let body = serde_json::to_value(request)?;
        self.send(RequestAttempt::post_json(
            "/openstack/network/create-network/",
            body,
        ))
        .await
    }

    async fn list_ports(&self, network_id: &str) -> Result<Vec<Port>> {
        self.send(RequestAttempt::get(format!(
            "/openstack/network/{}/ports/",
            network_id
        )))
        .await
    }

    async fn list_floating_ips(&self) -> Result<Vec<FloatingIp>> {
        self.send(RequestAttempt::get("/openstack/network/floatingip-list/"))
            .await
    }

    async fn ip_inventory(&self) -> Result<IpInventory> {
        self.send(RequestAttempt::get(
            "/openstack/network/list-all-ip-of-project/",
        ))
        .await
    }

    async fn allocate_floating_ip(&self) -> Result<StatusMessage> {
        self.send(RequestAttempt::post("/openstack/floatingip/create/"))
            .await
    }

    async fn assign_floating_ip(&self, ip_id: &str, vm_id: &str) -> Result<StatusMessage> {
        self.send(RequestAttempt::post_json(
            "/project/assign-floating-ip/",
            json!({ "ip_id": ip_id, "vm_id": vm_id }),
        ))
        .await
    }

    async fn unassign_floating_ip(&self, ip_id: &str) -> Result<StatusMessage> {
        self.send(RequestAttempt::post_json(
            "/project/unassign-floating-ip/",
            json!({ "ip_id": ip_id }),
        ))
        .await
    }

    async fn release_floating_ip(&self, ip_id: &str) -> Result<StatusMessage> {
        self.send(RequestAttempt::post_json(
            "/project/release-floating-ip/",
            json!({ "ip_id": ip_id }),
        ))
        .await
    }
}
