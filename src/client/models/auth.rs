//! Authentication and session models

use serde::{Deserialize, Serialize};

/// A project the user may scope a session to, offered during login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectScope {
    /// Project ID
    pub id: i64,

    /// Project name
    pub name: String,
}

/// Token grant returned when an admin starts impersonating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpersonationGrant {
    /// Access token scoped to the impersonated user
    pub access_token: String,

    /// Impersonated username
    pub username: String,

    /// Project the impersonated session is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

/// Two-factor enrollment material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorEnrollment {
    /// QR code as a `data:image/png;base64,...` URI
    pub qr_code: String,
}
