//! Credential storage for portal sessions
//!
//! The portal hands out short-lived access tokens, an optional impersonation
//! token, and a refresh credential carried as a session cookie. Each lives in
//! its own slot of a [`CredentialStore`]. Reads never fail a request: a slot
//! that is missing, malformed, or expired reads as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod file;
#[cfg(test)]
pub mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// Lifetime the portal assigns to access tokens minted by login or refresh
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// An access token with its absolute expiry instant
///
/// Persisted as JSON with `expiry` in epoch milliseconds, matching the
/// portal's own record layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenRecord {
    /// The bearer token string
    pub token: String,

    /// Absolute expiry instant
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expiry: DateTime<Utc>,
}

impl AccessTokenRecord {
    /// Build a record for a token issued right now, with the portal's fixed TTL
    pub fn issued_now(token: String) -> Self {
        Self {
            token,
            expiry: Utc::now() + chrono::Duration::seconds(ACCESS_TOKEN_TTL_SECS),
        }
    }

    /// Whether the expiry instant has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiry
    }

    /// Parse a stored slot value, yielding `None` for malformed or expired
    /// records so callers treat them exactly like a missing slot.
    pub fn parse_slot(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .filter(|record| !record.is_expired())
    }
}

/// Storage for the three credential slots of a portal session
///
/// Implementations synchronize access internally; the client holds the store
/// behind an `Arc` and may read and write from concurrent requests.
pub trait CredentialStore: Send + Sync {
    /// Current access token record, if present and not expired.
    ///
    /// A malformed or expired slot is removed as a side effect and reads as
    /// absent. This read never errors.
    fn access_record(&self) -> Option<AccessTokenRecord>;

    /// Persist a new access token record, replacing any previous one
    fn store_access(&self, record: &AccessTokenRecord) -> Result<()>;

    /// Drop the stored access token record
    fn clear_access(&self);

    /// Raw impersonation token slot contents, if any
    fn impersonation_token(&self) -> Option<String>;

    /// Persist an impersonation token
    fn store_impersonation(&self, token: &str) -> Result<()>;

    /// Drop the impersonation token
    fn clear_impersonation(&self);

    /// Stored session cookie line from the last login or refresh
    fn session_cookie(&self) -> Option<String>;

    /// Persist the session cookie line
    fn store_session_cookie(&self, cookie: &str) -> Result<()>;

    /// Drop the session cookie
    fn clear_session_cookie(&self);

    /// Convenience accessor for just the access token string
    fn access_token(&self) -> Option<String> {
        self.access_record().map(|record| record.token)
    }
}
