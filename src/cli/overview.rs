//! Overview command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::OverviewApi;
use crate::client::models::ResourceLimits;
use crate::error::Result;
use crate::output::{formatters, json, table};

/// One quota row for table display
#[derive(Tabled)]
struct LimitDisplay {
    #[tabled(rename = "RESOURCE")]
    resource: String,
    #[tabled(rename = "USED")]
    used: String,
    #[tabled(rename = "LIMIT")]
    limit: String,
    #[tabled(rename = "USAGE")]
    usage: String,
}

/// RAM arrives in MiB and storage in GiB; format each row in its own unit
fn limit_rows(limits: &ResourceLimits) -> Vec<LimitDisplay> {
    vec![
        LimitDisplay {
            resource: "vCPUs".to_string(),
            used: format!("{:.0}", limits.cpu.used),
            limit: format!("{:.0}", limits.cpu.limit),
            usage: formatters::format_percent(limits.cpu.used, limits.cpu.limit),
        },
        LimitDisplay {
            resource: "RAM".to_string(),
            used: formatters::format_mib(limits.ram.used),
            limit: formatters::format_mib(limits.ram.limit),
            usage: formatters::format_percent(limits.ram.used, limits.ram.limit),
        },
        LimitDisplay {
            resource: "Storage".to_string(),
            used: formatters::format_gib(limits.storage.used),
            limit: formatters::format_gib(limits.storage.limit),
            usage: formatters::format_percent(limits.storage.used, limits.storage.limit),
        },
    ]
}

/// Run the overview limits command
pub async fn limits(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let limits = ctx.client.limits().await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", table::format_table(&limit_rows(&limits)));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&limits)?);
        }
    }

    Ok(())
}

/// Run the overview resources command
pub async fn resources(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let counts = ctx.client.resources().await?;

    match ctx.format {
        OutputFormat::Table => {
            let offline = if counts.offline_servers > 0 {
                counts.offline_servers.to_string().red().to_string()
            } else {
                counts.offline_servers.to_string()
            };

            println!("{}", "Project Servers".bold());
            println!();
            println!("  Total:   {}", counts.total_servers);
            println!("  Online:  {}", counts.online_servers.to_string().green());
            println!("  Offline: {}", offline);
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&counts)?);
        }
    }

    Ok(())
}

/// Run the overview summary command
pub async fn summary(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let summary = ctx.client.admin_summary().await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Platform Summary".bold());
            println!();
            println!(
                "  Instances:    {} / {} ({})",
                summary.total_instances,
                summary.max_instances,
                formatters::format_percent(
                    summary.total_instances as f64,
                    summary.max_instances as f64
                )
            );
            println!(
                "  Floating IPs: {} / {} ({})",
                summary.floating_ips_used,
                summary.floating_ips_total,
                formatters::format_percent(
                    summary.floating_ips_used as f64,
                    summary.floating_ips_total as f64
                )
            );
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&summary)?);
        }
    }

    Ok(())
}
