//! File-backed credential store
//!
//! Slots live as individual files next to the config file (by default
//! `~/.portalops/`), each written `0600` on Unix.

use std::path::{Path, PathBuf};

use log::debug;

use super::{AccessTokenRecord, CredentialStore};
use crate::error::Result;

const ACCESS_TOKEN_FILE: &str = "access_token.json";
const IMPERSONATION_FILE: &str = "impersonation_token";
const SESSION_COOKIE_FILE: &str = "session_cookie";

/// Credential store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_slot(&self, name: &str) -> Option<String> {
        let contents = std::fs::read_to_string(self.slot_path(name)).ok()?;
        Some(contents.trim().to_string())
    }

    fn write_slot(&self, name: &str, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.slot_path(name);
        std::fs::write(&path, contents)?;

        // Credential material: owner read/write only on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    fn remove_slot(&self, name: &str) {
        let path = self.slot_path(name);
        if let Err(err) = std::fs::remove_file(&path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                debug!("could not remove credential slot {}: {}", path.display(), err);
            }
        }
    }
}

impl CredentialStore for FileStore {
    fn access_record(&self) -> Option<AccessTokenRecord> {
        let raw = self.read_slot(ACCESS_TOKEN_FILE)?;
        match AccessTokenRecord::parse_slot(&raw) {
            Some(record) => Some(record),
            None => {
                // Malformed and expired entries read the same as missing ones
                self.remove_slot(ACCESS_TOKEN_FILE);
                None
            }
        }
    }

    fn store_access(&self, record: &AccessTokenRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.write_slot(ACCESS_TOKEN_FILE, &raw)
    }

    fn clear_access(&self) {
        self.remove_slot(ACCESS_TOKEN_FILE);
    }

    fn impersonation_token(&self) -> Option<String> {
        self.read_slot(IMPERSONATION_FILE)
    }

    fn store_impersonation(&self, token: &str) -> Result<()> {
        self.write_slot(IMPERSONATION_FILE, token)
    }

    fn clear_impersonation(&self) {
        self.remove_slot(IMPERSONATION_FILE);
    }

    fn session_cookie(&self) -> Option<String> {
        self.read_slot(SESSION_COOKIE_FILE)
    }

    fn store_session_cookie(&self, cookie: &str) -> Result<()> {
        self.write_slot(SESSION_COOKIE_FILE, cookie)
    }

    fn clear_session_cookie(&self) {
        self.remove_slot(SESSION_COOKIE_FILE);
    }
}
