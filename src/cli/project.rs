//! Project command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{Project, ProjectPackage};
use crate::client::{AuthApi, ProjectApi};
use crate::error::Result;
use crate::output::{formatters, json, table};

/// Project for table display
#[derive(Tabled)]
struct ProjectDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PACKAGE")]
    package: String,
    #[tabled(rename = "PRICE/MO")]
    price: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

impl From<Project> for ProjectDisplay {
    fn from(project: Project) -> Self {
        let (package, price) = match project.package {
            Some(package) => (
                package.name,
                package
                    .price_per_month
                    .map(|p| format!("${:.2}", p))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        Self {
            id: project.id.to_string(),
            name: project.name,
            package,
            price,
            created: formatters::format_timestamp(project.created_at.as_deref().unwrap_or("")),
        }
    }
}

/// VPS package for table display
#[derive(Tabled)]
struct PackageDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "VCPUS")]
    vcpus: String,
    #[tabled(rename = "RAM")]
    ram: String,
    #[tabled(rename = "DISK")]
    disk: String,
    #[tabled(rename = "PRICE/MO")]
    price: String,
}

impl From<ProjectPackage> for PackageDisplay {
    fn from(package: ProjectPackage) -> Self {
        Self {
            id: package.id.to_string(),
            name: package.name,
            vcpus: package
                .vcpus
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ram: package
                .ram
                .map(|v| formatters::format_mib(v as f64))
                .unwrap_or_else(|| "-".to_string()),
            disk: package
                .disk
                .map(|v| formatters::format_gib(v as f64))
                .unwrap_or_else(|| "-".to_string()),
            price: package
                .price_per_month
                .map(|p| format!("${:.2}", p))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the project list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let projects = ctx.client.list_projects().await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<ProjectDisplay> =
                projects.into_iter().map(ProjectDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&projects)?);
        }
    }

    Ok(())
}

/// Run the project get command
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let detail = ctx.client.project_detail(id).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Project".bold());
            println!();
            println!("  ID:      {}", detail.id);
            println!("  Name:    {}", detail.name);
            if let Some(status) = &detail.status {
                println!("  Status:  {}", status);
            }
            if let Some(description) = &detail.description {
                println!("  About:   {}", description);
            }
            if let Some(package) = &detail.package {
                match package.price_per_month {
                    Some(price) => println!("  Package: {} (${:.2}/mo)", package.name, price),
                    None => println!("  Package: {}", package.name),
                }
            }
            if let Some(created) = &detail.created_at {
                println!("  Created: {}", formatters::format_timestamp(created));
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&detail)?);
        }
    }

    Ok(())
}

/// Run the project switch command
pub async fn switch(opts: &GlobalOptions, id: i64) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    println!("Verifying project...");
    let detail = ctx.client.project_detail(id).await?;

    ctx.client.switch_project(id).await?;

    // The re-scoped token is already stored; remember the project for status
    ctx.config.project_id = Some(id.to_string());
    ctx.config.project_name = Some(detail.name.clone());
    ctx.save_config()?;

    println!(
        "{} Switched to project: {} ({})",
        "✓".green(),
        detail.name.bold(),
        id
    );

    Ok(())
}

/// Run the project packages command
pub async fn packages(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let packages = ctx.client.list_packages().await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<PackageDisplay> =
                packages.into_iter().map(PackageDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&packages)?);
        }
    }

    Ok(())
}

/// Run the project change-package command
pub async fn change_package(opts: &GlobalOptions, project_id: i64, package_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.change_package(project_id, package_id).await?;

    println!(
        "{} {}",
        "✓".green(),
        status.display(&format!(
            "Project {} moved to package {}",
            project_id, package_id
        ))
    );

    Ok(())
}
