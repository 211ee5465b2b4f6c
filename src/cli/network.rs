//! Network command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::NetworkApi;
use crate::client::models::{CreateNetworkRequest, Network, Port};
use crate::error::Result;
use crate::output::{json, table};

/// Network for table display
#[derive(Tabled)]
struct NetworkDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "SHARED")]
    shared: String,
    #[tabled(rename = "SUBNETS")]
    subnets: String,
}

impl From<Network> for NetworkDisplay {
    fn from(network: Network) -> Self {
        Self {
            id: network.id,
            name: network.name,
            status: network.status.unwrap_or_else(|| "-".to_string()),
            shared: if network.shared {
                "\u{2713}".to_string()
            } else {
                String::new()
            },
            subnets: if network.subnets.is_empty() {
                "-".to_string()
            } else {
                network.subnets.join(", ")
            },
        }
    }
}

/// Port for table display
#[derive(Tabled)]
struct PortDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "IP ADDRESSES")]
    ips: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "ATTACHED TO")]
    device: String,
}

impl From<Port> for PortDisplay {
    fn from(port: Port) -> Self {
        Self {
            id: port.id,
            ips: if port.ip_addresses.is_empty() {
                "-".to_string()
            } else {
                port.ip_addresses.join(", ")
            },
            status: port.status.unwrap_or_else(|| "-".to_string()),
            device: port.device_id.unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the network list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let networks = ctx.client.list_networks().await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<NetworkDisplay> =
                networks.into_iter().map(NetworkDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&networks)?);
        }
    }

    Ok(())
}

/// Run the network create command
pub async fn create(
    opts: &GlobalOptions,
    name: String,
    cidr: String,
    gateway: Option<String>,
    no_dhcp: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = CreateNetworkRequest {
        name: name.clone(),
        cidr,
        gateway_ip: gateway,
        enable_dhcp: !no_dhcp,
    };
    let status = ctx.client.create_network(&request).await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display(&format!("Network '{}' created", name))
    );

    Ok(())
}

/// Run the network ports command
pub async fn ports(opts: &GlobalOptions, network_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let ports = ctx.client.list_ports(network_id).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<PortDisplay> = ports.into_iter().map(PortDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&ports)?);
        }
    }

    Ok(())
}
