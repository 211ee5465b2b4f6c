//! Compute instance API

use async_trait::async_trait;
use serde_json::json;

use crate::client::Scope;
use crate::client::models::{ConsoleAccess, Instance, InstanceAction, StatusMessage};
use crate::client::portal::{PortalClient, RequestAttempt};
use crate::error::Result;

/// Instance operations for the portal API
#[async_trait]
pub trait ComputeApi: Send + Sync {
    /// List instances visible in the given scope
    async fn list_instances(&self, scope: Scope) -> Result<Vec<Instance>>;

    /// Run a power action against an instance
    async fn instance_action(
        &self,
        scope: Scope,
        instance_id: &str,
        action: InstanceAction,
    ) -> Result<StatusMessage>;

    /// Request a one-time noVNC console URL for an instance
    async fn instance_console(&self, scope: Scope, instance_id: &str) -> Result<ConsoleAccess>;
}

#[async_trait]
impl ComputeApi for PortalClient {
    async fn list_instances(&self, scope: Scope) -> Result<Vec<Instance>> {
        self.send(RequestAttempt::get(scope.prefixed("/overview/instances/")))
            .await
    }

    async fn instance_action(
        &self,
        scope: Scope,
        instance_id: &str,
        action: InstanceAction,
    ) -> Result<StatusMessage> {
        let path = scope.prefixed(&format!(
            "/openstack/compute/instances/{}/action/",
            instance_id
        ));
        self.send(RequestAttempt::post_json(
            path,
            json!({ "action": action.as_str() }),
        ))
        .await
    }

    async fn instance_console(&self, scope: Scope, instance_id: &str) -> Result<ConsoleAccess> {
        self.send(RequestAttempt::post_json(
            scope.prefixed("/overview/console/"),
            json!({ "server_id": instance_id, "type": "novnc" }),
        ))
        .await
    }
}
