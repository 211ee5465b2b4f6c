//! Logout command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::creds::{CredentialStore, FileStore};
use crate::error::Result;

/// Run the logout command
///
/// Works entirely offline: the session stops being usable once the local
/// credential slots are gone. The portal URL and preferences stay configured.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::path_for(opts.config_ref())?;
    let mut config = Config::load_or_default(config_path.clone())?;

    let store = FileStore::new(Config::credentials_root(&config_path));
    store.clear_impersonation();
    store.clear_access();
    store.clear_session_cookie();

    if config.username.is_some() {
        config.clear_identity();
        config.save_to(config_path)?;
        println!("{} Signed out.", "✓".green());
    } else {
        println!("{} No active session; stored credentials cleared.", "○".dimmed());
    }

    Ok(())
}
