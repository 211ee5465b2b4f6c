//! Usage and capacity API

use async_trait::async_trait;

use crate::client::models::{AdminSummary, ResourceLimits, ServerCounts};
use crate::client::portal::{PortalClient, RequestAttempt};
use crate::error::Result;

/// Rollup operations for the portal API
#[async_trait]
pub trait OverviewApi: Send + Sync {
    /// Project quota usage: CPU, RAM, and storage
    async fn limits(&self) -> Result<ResourceLimits>;

    /// Server counts for the project
    async fn resources(&self) -> Result<ServerCounts>;

    /// Platform-wide capacity summary (admin only)
    async fn admin_summary(&self) -> Result<AdminSummary>;
}

#[async_trait]
impl OverviewApi for PortalClient {
    async fn limits(&self) -> Result<ResourceLimits> {
        self.send(RequestAttempt::get("/overview/limits/")).await
    }

    async fn resources(&self) -> Result<ServerCounts> {
        self.send(RequestAttempt::get("/overview/resources/")).await
    }

    async fn admin_summary(&self) -> Result<AdminSummary> {
        self.send(RequestAttempt::get("/overview/admin/summary/"))
            .await
    }
}
