//! Access token claim decoding
//!
//! Portal access tokens are JWTs. The CLI reads payload claims for identity
//! display and the impersonation flag; it never verifies signatures, the
//! portal does that server-side.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    // Base64url uses - instead of + and _ instead of /
    let standard_b64 = input.replace('-', "+").replace('_', "/");

    // Add padding if needed
    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

/// Claims the portal embeds in its access tokens
#[derive(Debug, Clone)]
pub struct AccessClaims {
    pub username: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub project_id: Option<String>,
    /// Set on tokens minted for an impersonation session
    pub impersonated: bool,
    /// Expiry as a Unix timestamp
    pub exp: Option<i64>,
}

/// Wire-level payload; some token variants carry `name` instead of
/// `username`, and `project_id` may be a number or a string
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    project_id: Option<serde_json::Value>,
    #[serde(default)]
    impersonated: bool,
    #[serde(default)]
    exp: Option<i64>,
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl AccessClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("(unknown)")
    }
}

/// Decode the payload claims of an access token without verifying it
pub fn decode(token: &str) -> Result<AccessClaims> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::InvalidToken.into());
    }

    let payload_bytes = base64_decode_url(parts[1]).map_err(|_| ApiError::InvalidToken)?;
    let raw: RawClaims =
        serde_json::from_slice(&payload_bytes).map_err(|_| ApiError::InvalidToken)?;

    Ok(AccessClaims {
        username: raw.username.or(raw.name),
        email: raw.email,
        roles: raw.roles,
        project_id: raw.project_id.and_then(scalar_to_string),
        impersonated: raw.impersonated,
        exp: raw.exp,
    })
}

/// Build an unsigned token around the given payload claims
#[cfg(test)]
pub(crate) fn encode_unsigned(payload: &serde_json::Value) -> String {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.sig", header, body)
}
