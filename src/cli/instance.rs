//! Instance command implementations

use clap::ValueEnum;
use colored::Colorize;
use log::debug;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{Instance, InstanceAction};
use crate::client::{ComputeApi, Scope};
use crate::error::Result;
use crate::output::{formatters, json, table};

/// Power action accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InstanceActionArg {
    Start,
    Stop,
    Reboot,
}

impl From<InstanceActionArg> for InstanceAction {
    fn from(arg: InstanceActionArg) -> Self {
        match arg {
            InstanceActionArg::Start => InstanceAction::Start,
            InstanceActionArg::Stop => InstanceAction::Stop,
            InstanceActionArg::Reboot => InstanceAction::Reboot,
        }
    }
}

/// Instance for table display
#[derive(Tabled)]
struct InstanceDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "PLAN")]
    plan: String,
    #[tabled(rename = "REGION")]
    region: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

impl From<Instance> for InstanceDisplay {
    fn from(instance: Instance) -> Self {
        Self {
            id: instance.id,
            name: instance.name,
            status: colorize_status(&instance.status),
            ip: instance.ip.unwrap_or_else(|| "-".to_string()),
            plan: instance.plan.unwrap_or_else(|| "-".to_string()),
            region: instance.region.unwrap_or_else(|| "-".to_string()),
            created: formatters::format_timestamp(instance.created.as_deref().unwrap_or("")),
        }
    }
}

/// Instance for admin-scope table display, with the owning project
#[derive(Tabled)]
struct AdminInstanceDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PROJECT")]
    project: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "REGION")]
    region: String,
}

impl From<Instance> for AdminInstanceDisplay {
    fn from(instance: Instance) -> Self {
        Self {
            id: instance.id,
            name: instance.name,
            project: instance.project.unwrap_or_else(|| "-".to_string()),
            status: colorize_status(&instance.status),
            ip: instance.ip.unwrap_or_else(|| "-".to_string()),
            region: instance.region.unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn colorize_status(status: &str) -> String {
    match status.to_uppercase().as_str() {
        "ACTIVE" => status.green().to_string(),
        "SHUTOFF" | "ERROR" => status.red().to_string(),
        _ => status.yellow().to_string(),
    }
}

/// Run the instance list command
pub async fn list(opts: &GlobalOptions, admin: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let scope = Scope::admin(admin);

    debug!("Fetching instances in {:?} scope", scope);
    let instances = ctx.client.list_instances(scope).await?;
    debug!("Fetched {} instances", instances.len());

    match ctx.format {
        OutputFormat::Table if admin => {
            let rows: Vec<AdminInstanceDisplay> = instances
                .into_iter()
                .map(AdminInstanceDisplay::from)
                .collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Table => {
            let rows: Vec<InstanceDisplay> =
                instances.into_iter().map(InstanceDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&instances)?);
        }
    }

    Ok(())
}

/// Run the instance action command
pub async fn action(
    opts: &GlobalOptions,
    id: &str,
    action: InstanceActionArg,
    admin: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let verb: InstanceAction = action.into();

    let status = ctx
        .client
        .instance_action(Scope::admin(admin), id, verb)
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display(&format!("Requested '{}' on {}", verb, id))
    );

    Ok(())
}

/// Run the instance console command
pub async fn console(opts: &GlobalOptions, id: &str, admin: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let access = ctx.client.instance_console(Scope::admin(admin), id).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{} Console ready. The URL below is single-use:", "✓".green());
            println!("\n  {}\n", access.console.url.cyan());
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&access)?);
        }
    }

    Ok(())
}
