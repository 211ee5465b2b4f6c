//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::claims;
use crate::config::Config;
use crate::creds::{CredentialStore, FileStore};
use crate::error::Result;
use crate::output::formatters;

/// Run the status command to display session and configuration state
///
/// Entirely offline: reports what the credential slots hold right now, it
/// does not poke the portal to find out whether they still work.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "PortalOps Session Status".bold());

    let config_path = Config::path_for(opts.config_ref())?;
    let config = Config::load_or_default(config_path.clone())?;

    println!("Config file: {}", config_path.display().to_string().cyan());

    match config.base_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => println!("Portal: {}", url.cyan()),
        None => {
            println!("{} Portal URL not configured", "✗".red());
            println!(
                "  → Run {} to sign in",
                "portalops login --api-url <URL>".cyan()
            );
            println!();
            return Ok(());
        }
    }

    println!();

    let store = FileStore::new(Config::credentials_root(&config_path));

    // Impersonation wins over the regular session, so flag it first
    if let Some(token) = store.impersonation_token() {
        let name = claims::decode(&token)
            .map(|claims| claims.display_name().to_string())
            .unwrap_or_else(|_| "another user".to_string());
        println!("{} Impersonating {}", "⚠".yellow(), name.bold());
        println!(
            "  → Run {} to return to your own session",
            "portalops impersonate stop".cyan()
        );
        println!();
    }

    // Signed-in identity
    match &config.username {
        Some(username) => {
            println!("{} Signed in as {}", "✓".green(), username.bold());
            if let Some(project) = &config.project_name {
                println!(
                    "  Project: {} ({})",
                    project,
                    config.project_id.as_deref().unwrap_or("?")
                );
            }
        }
        None => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run {} to sign in", "portalops login".cyan());
        }
    }

    // Access token slot
    match store.access_record() {
        Some(record) => {
            println!(
                "{} Access token valid (expires in {})",
                "✓".green(),
                formatters::format_remaining(record.expiry)
            );
            if let Ok(token_claims) = claims::decode(&record.token) {
                if !token_claims.roles.is_empty() {
                    println!("  Roles: {}", token_claims.roles.join(", "));
                }
            }
        }
        None => println!(
            "{} No access token cached (will refresh on next command)",
            "○".dimmed()
        ),
    }

    // Refresh credential slot
    if store.session_cookie().is_some() {
        println!("{} Refresh credential present", "✓".green());
    } else {
        println!("{} No refresh credential", "✗".red());
        println!("  → Commands will fail until you run {}", "portalops login".cyan());
    }

    println!();

    Ok(())
}
