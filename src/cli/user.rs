//! User command implementations

use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::ProjectApi;
use crate::client::models::User;
use crate::error::Result;
use crate::output::{formatters, json, table};

/// Portal user for table display
#[derive(Tabled)]
struct UserDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "USERNAME")]
    username: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "PROJECT")]
    project: String,
    #[tabled(rename = "ACTIVE")]
    active: String,
    #[tabled(rename = "JOINED")]
    joined: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email.unwrap_or_else(|| "-".to_string()),
            project: user
                .project_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            active: if user.is_active {
                "\u{2713}".to_string()
            } else {
                String::new()
            },
            joined: formatters::format_timestamp(user.date_joined.as_deref().unwrap_or("")),
        }
    }
}

/// Run the user list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let users = ctx.client.list_users().await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<UserDisplay> = users.into_iter().map(UserDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&users)?);
        }
    }

    Ok(())
}
