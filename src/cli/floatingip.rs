//! Floating IP command implementations

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::NetworkApi;
use crate::client::models::{FloatingIp, IpAllocation};
use crate::error::Result;
use crate::output::{formatters, json, table};

/// Floating IP for table display
#[derive(Tabled)]
struct FloatingIpDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "ADDRESS")]
    address: String,
    #[tabled(rename = "FIXED IP")]
    fixed_ip: String,
    #[tabled(rename = "INSTANCE")]
    instance: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

impl From<FloatingIp> for FloatingIpDisplay {
    fn from(ip: FloatingIp) -> Self {
        let status = match ip.status.as_deref() {
            Some("ACTIVE") => "ACTIVE".green().to_string(),
            Some("DOWN") => "DOWN".dimmed().to_string(),
            Some(other) => other.to_string(),
            None => "-".to_string(),
        };

        Self {
            id: ip.id.unwrap_or_else(|| "-".to_string()),
            address: ip.ip_address,
            fixed_ip: ip.fixed_ip.unwrap_or_else(|| "-".to_string()),
            instance: ip.vm_name.unwrap_or_else(|| "-".to_string()),
            status,
            created: formatters::format_timestamp(ip.created_at.as_deref().unwrap_or("")),
        }
    }
}

/// One inventory row; floating and fixed entries share the table
#[derive(Tabled)]
struct AllocationDisplay {
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "ADDRESS")]
    address: String,
    #[tabled(rename = "MAPS TO")]
    maps_to: String,
    #[tabled(rename = "DEVICE")]
    device: String,
    #[tabled(rename = "VER")]
    version: String,
}

impl AllocationDisplay {
    fn new(kind: &str, allocation: IpAllocation) -> Self {
        Self {
            kind: kind.to_string(),
            address: allocation.ip,
            maps_to: allocation.fixed_ip.unwrap_or_else(|| "-".to_string()),
            device: allocation.device_id.unwrap_or_else(|| "-".to_string()),
            version: allocation
                .version
                .map(|v| format!("v{}", v))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the floating-ip list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let ips = ctx.client.list_floating_ips().await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<FloatingIpDisplay> =
                ips.into_iter().map(FloatingIpDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&ips)?);
        }
    }

    Ok(())
}

/// Run the floating-ip inventory command
pub async fn inventory(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let inventory = ctx.client.ip_inventory().await?;

    match ctx.format {
        OutputFormat::Table => {
            let mut rows: Vec<AllocationDisplay> = inventory
                .floating_ips
                .into_iter()
                .map(|a| AllocationDisplay::new("floating", a))
                .collect();
            rows.extend(
                inventory
                    .fixed_ips
                    .into_iter()
                    .map(|a| AllocationDisplay::new("fixed", a)),
            );
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&inventory)?);
        }
    }

    Ok(())
}

/// Run the floating-ip allocate command
pub async fn allocate(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.allocate_floating_ip().await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display("Floating IP allocated")
    );

    Ok(())
}

/// Run the floating-ip assign command
pub async fn assign(opts: &GlobalOptions, ip_id: &str, vm_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.assign_floating_ip(ip_id, vm_id).await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display(&format!("Floating IP {} assigned to {}", ip_id, vm_id))
    );

    Ok(())
}

/// Run the floating-ip unassign command
pub async fn unassign(opts: &GlobalOptions, ip_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.unassign_floating_ip(ip_id).await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display(&format!("Floating IP {} detached", ip_id))
    );

    Ok(())
}

/// Run the floating-ip release command
pub async fn release(opts: &GlobalOptions, ip_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    // Releasing returns the address to the pool; it may come back different
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Release floating IP '{}'?", ip_id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let status = ctx.client.release_floating_ip(ip_id).await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display(&format!("Floating IP {} released", ip_id))
    );

    Ok(())
}
