//! Impersonation command implementations

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::creds::CredentialStore;
use crate::error::Result;

/// Run the impersonate start command
pub async fn start(opts: &GlobalOptions, user_id: i64, project: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let grant = ctx.client.impersonate(user_id, project).await?;

    println!("{} Impersonating {}", "⚠".yellow(), grant.username.bold());
    if let Some(project_id) = grant.project_id {
        println!("  Project: {}", project_id);
    }
    println!(
        "  Commands now run as this user. Run {} to return.",
        "portalops impersonate stop".cyan()
    );

    Ok(())
}

/// Run the impersonate stop command
pub async fn stop(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if ctx.store.impersonation_token().is_none() {
        println!("{} Not impersonating anyone.", "○".dimmed());
        return Ok(());
    }

    ctx.client.unimpersonate().await?;
    println!("{} Back to your own session.", "✓".green());

    Ok(())
}
