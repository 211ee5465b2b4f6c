//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::client::models::ProjectScope;
use crate::error::{ApiError, Result};

/// Run the login command
///
/// Sign-in is two-step: the credentials first list which projects the account
/// may scope a session to, then the actual login names one of them. Passing
/// `--project` skips the picker.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    project: Option<i64>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    println!("{}", "Sign in to the portal".bold());
    println!("Portal: {}\n", ctx.config.require_base_url()?.cyan());

    let username = match username {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };

    let password: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    println!("\n{}", "Checking credentials...".cyan());
    let scopes = ctx.client.project_scopes(&username, &password).await?;

    let scope = pick_scope(scopes, project)?;

    ctx.client.login(&username, &password, scope.id).await?;

    // Remember the signed-in identity for status and later runs
    ctx.config.username = Some(username.clone());
    ctx.config.project_id = Some(scope.id.to_string());
    ctx.config.project_name = Some(scope.name.clone());
    ctx.save_config()?;

    println!("{}", "✓ Signed in!".green());
    println!("  User:    {}", username.bold());
    println!("  Project: {} ({})", scope.name.bold(), scope.id);

    println!("\n{}", "Try running:".bold());
    println!("  {} - Show session status", "portalops status".cyan());
    println!("  {} - List your instances", "portalops instance list".cyan());

    Ok(())
}

/// Choose the project to scope the session to
fn pick_scope(mut scopes: Vec<ProjectScope>, requested: Option<i64>) -> Result<ProjectScope> {
    if let Some(id) = requested {
        return scopes
            .into_iter()
            .find(|scope| scope.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Project {}", id)).into());
    }

    match scopes.len() {
        0 => Err(ApiError::InvalidResponse(
            "This account has no projects to sign in to".to_string(),
        )
        .into()),
        1 => {
            let scope = scopes.remove(0);
            println!("Project: {}", scope.name.bold());
            Ok(scope)
        }
        _ => {
            let names: Vec<String> = scopes
                .iter()
                .map(|scope| format!("{} ({})", scope.name, scope.id))
                .collect();

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Select a project")
                .items(&names)
                .default(0)
                .interact()?;

            Ok(scopes.remove(selection))
        }
    }
}
