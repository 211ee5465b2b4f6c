//! Portal user models

use serde::{Deserialize, Serialize};

/// A portal account, from the admin user listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: i64,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Project the account belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    /// Per-user resource rollup as reported by the portal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_summary: Option<serde_json::Value>,
}
