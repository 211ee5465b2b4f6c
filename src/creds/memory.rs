//! In-memory credential store for unit tests

use std::sync::RwLock;

use super::{AccessTokenRecord, CredentialStore};
use crate::error::Result;

#[derive(Debug, Default)]
struct Slots {
    access: Option<String>,
    impersonation: Option<String>,
    session: Option<String>,
}

/// Test double holding raw slot contents, with the same read semantics as
/// the file store (malformed and expired access records are dropped on read)
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<Slots>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the access slot with raw contents, bypassing serialization
    pub fn put_raw_access(&self, raw: &str) {
        self.slots.write().unwrap().access = Some(raw.to_string());
    }
}

impl CredentialStore for MemoryStore {
    fn access_record(&self) -> Option<AccessTokenRecord> {
        let raw = self.slots.read().unwrap().access.clone()?;
        match AccessTokenRecord::parse_slot(&raw) {
            Some(record) => Some(record),
            None => {
                self.slots.write().unwrap().access = None;
                None
            }
        }
    }

    fn store_access(&self, record: &AccessTokenRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.slots.write().unwrap().access = Some(raw);
        Ok(())
    }

    fn clear_access(&self) {
        self.slots.write().unwrap().access = None;
    }

    fn impersonation_token(&self) -> Option<String> {
        self.slots.read().unwrap().impersonation.clone()
    }

    fn store_impersonation(&self, token: &str) -> Result<()> {
        self.slots.write().unwrap().impersonation = Some(token.to_string());
        Ok(())
    }

    fn clear_impersonation(&self) {
        self.slots.write().unwrap().impersonation = None;
    }

    fn session_cookie(&self) -> Option<String> {
        self.slots.read().unwrap().session.clone()
    }

    fn store_session_cookie(&self, cookie: &str) -> Result<()> {
        self.slots.write().unwrap().session = Some(cookie.to_string());
        Ok(())
    }

    fn clear_session_cookie(&self) {
        self.slots.write().unwrap().session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_access_with_bad_contents_reads_absent() {
        let store = MemoryStore::new();
        store.put_raw_access("][");

        assert!(store.access_record().is_none());
        // The slot was dropped, not just skipped
        assert!(store.slots.read().unwrap().access.is_none());
    }

    #[test]
    fn test_access_roundtrip() {
        let store = MemoryStore::new();
        let record = AccessTokenRecord::issued_now("tok".to_string());
        store.store_access(&record).unwrap();
        assert_eq!(store.access_token().unwrap(), "tok");
    }
}
