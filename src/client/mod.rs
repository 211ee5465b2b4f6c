//! PortalOps API client

pub mod api;
pub mod claims;
pub mod models;
pub mod portal;

pub use api::{AuthApi, ComputeApi, NetworkApi, OverviewApi, ProjectApi, Scope};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockPortalClient;
pub use portal::PortalClient;

/// The full portal API surface under one name.
///
/// [`PortalClient`] implements it via the blanket impl, and so does
/// [`MockPortalClient`], which lets tests drive command pipelines without a
/// live portal.
pub trait PortalApi: AuthApi + ComputeApi + NetworkApi + ProjectApi + OverviewApi {}

impl<T> PortalApi for T where T: AuthApi + ComputeApi + NetworkApi + ProjectApi + OverviewApi {}
