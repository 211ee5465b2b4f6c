//! API trait definitions split by responsibility
//!
//! This module organizes the portal API surface into focused sub-traits:
//! - [`AuthApi`] - session, impersonation, and two-factor operations
//! - [`ComputeApi`] - instance listing, power actions, console access
//! - [`NetworkApi`] - networks, ports, and floating IPs
//! - [`ProjectApi`] - projects and VPS packages
//! - [`OverviewApi`] - usage and capacity rollups
//!
//! The [`PortalApi`](super::PortalApi) super-trait combines all five. Each
//! sub-trait is implemented for [`PortalClient`](super::PortalClient) next to
//! its definition.

mod auth;
mod compute;
mod network;
mod overview;
mod project;

pub use auth::AuthApi;
pub use compute::ComputeApi;
pub use network::NetworkApi;
pub use overview::OverviewApi;
pub use project::ProjectApi;

/// Route scope: regular project routes or their `/admin` variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    Admin,
}

impl Scope {
    /// Prefix a path for this scope
    pub(crate) fn prefixed(&self, path: &str) -> String {
        match self {
            Scope::Project => path.to_string(),
            Scope::Admin => format!("/admin{}", path),
        }
    }

    /// Scope selected by an `--admin` style flag
    pub fn admin(is_admin: bool) -> Self {
        if is_admin { Scope::Admin } else { Scope::Project }
    }
}
