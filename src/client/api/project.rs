//! Project and user API

use async_trait::async_trait;
use serde_json::json;

use crate::client::models::{Project, ProjectDetail, ProjectPackage, StatusMessage, User};
use crate::client::portal::{PortalClient, RequestAttempt};
use crate::error::Result;

/// Project operations for the portal API
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// List the caller's projects
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Fetch one project with its package and status
    async fn project_detail(&self, project_id: i64) -> Result<ProjectDetail>;

    /// List the VPS packages available for purchase
    async fn list_packages(&self) -> Result<Vec<ProjectPackage>>;

    /// Move a project onto a different VPS package
    async fn change_package(&self, project_id: i64, package_id: i64) -> Result<StatusMessage>;

    /// List portal users (admin only)
    async fn list_users(&self) -> Result<Vec<User>>;
}

#[async_trait]
impl ProjectApi for PortalClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.send(RequestAttempt::get("/project/projects/list/")).await
    }

    async fn project_detail(&self, project_id: i64) -> Result<ProjectDetail> {
        self.send(RequestAttempt::get(format!(
            "/project/{}/project-detail/",
            project_id
        )))
        .await
    }

    async fn list_packages(&self) -> Result<Vec<ProjectPackage>> {
        self.send(RequestAttempt::get("/project/project-packages/list/"))
            .await
    }

    async fn change_package(&self, project_id: i64, package_id: i64) -> Result<StatusMessage> {
        self.send(RequestAttempt::post_json(
            "/project/change-vps-package/",
            json!({ "project_id": project_id, "project_type_id": package_id }),
        ))
        .await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.send(RequestAttempt::get("/auth/ausers-list/")).await
    }
}
