//! PortalOps API data models
//!
//! Domain types for the portal REST API, organized by resource. Wire names
//! are snake_case throughout, so fields map directly.

// Allow unused imports - we export all API types for completeness,
// even if not all are currently used by CLI commands.
#![allow(unused_imports)]

mod auth;
mod common;
mod instance;
mod network;
mod overview;
mod project;
mod user;

// Re-export all models for convenient access
pub use auth::{ImpersonationGrant, ProjectScope, TwoFactorEnrollment};
pub use common::StatusMessage;
pub use instance::{ConsoleAccess, ConsoleEndpoint, Instance, InstanceAction};
pub use network::{CreateNetworkRequest, FloatingIp, IpAllocation, IpInventory, Network, Port};
pub use overview::{AdminSummary, ResourceLimits, ServerCounts, UsagePair};
pub use project::{Project, ProjectDetail, ProjectPackage, ProjectType};
pub use user::User;
