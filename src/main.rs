//! PortalOps CLI - Command-line companion for the OpenStack VPS portal

use clap::Parser;

mod cli;
mod client;
mod config;
mod creds;
mod error;
mod output;

use cli::{
    Cli, Commands, FloatingIpCommands, GlobalOptions, ImpersonateCommands, InstanceCommands,
    NetworkCommands, OverviewCommands, ProjectCommands, TwoFactorCommands, UserCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // --debug selects verbose logging for this crate; RUST_LOG still wins
    let default_filter = if cli.debug {
        "portalops=debug"
    } else {
        "portalops=warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, project } => cli::login::run(&opts, username, project).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("portalops version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Instance(instance_cmd) => match instance_cmd {
            InstanceCommands::List { admin } => cli::instance::list(&opts, admin).await,
            InstanceCommands::Action { id, action, admin } => {
                cli::instance::action(&opts, &id, action, admin).await
            }
            InstanceCommands::Console { id, admin } => {
                cli::instance::console(&opts, &id, admin).await
            }
        },
        Commands::Network(network_cmd) => match network_cmd {
            NetworkCommands::List => cli::network::list(&opts).await,
            NetworkCommands::Create {
                name,
                cidr,
                gateway,
                no_dhcp,
            } => cli::network::create(&opts, name, cidr, gateway, no_dhcp).await,
            NetworkCommands::Ports { network_id } => cli::network::ports(&opts, &network_id).await,
        },
        Commands::FloatingIp(ip_cmd) => match ip_cmd {
            FloatingIpCommands::List => cli::floatingip::list(&opts).await,
            FloatingIpCommands::Inventory => cli::floatingip::inventory(&opts).await,
            FloatingIpCommands::Allocate => cli::floatingip::allocate(&opts).await,
            FloatingIpCommands::Assign { ip_id, vm_id } => {
                cli::floatingip::assign(&opts, &ip_id, &vm_id).await
            }
            FloatingIpCommands::Unassign { ip_id } => {
                cli::floatingip::unassign(&opts, &ip_id).await
            }
            FloatingIpCommands::Release { ip_id, yes } => {
                cli::floatingip::release(&opts, &ip_id, yes).await
            }
        },
        Commands::Project(project_cmd) => match project_cmd {
            ProjectCommands::List => cli::project::list(&opts).await,
            ProjectCommands::Get { id } => cli::project::get(&opts, id).await,
            ProjectCommands::Switch { id } => cli::project::switch(&opts, id).await,
            ProjectCommands::Packages => cli::project::packages(&opts).await,
            ProjectCommands::ChangePackage {
                project_id,
                package_id,
            } => cli::project::change_package(&opts, project_id, package_id).await,
        },
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::List => cli::user::list(&opts).await,
        },
        Commands::Overview(overview_cmd) => match overview_cmd {
            OverviewCommands::Limits => cli::overview::limits(&opts).await,
            OverviewCommands::Resources => cli::overview::resources(&opts).await,
            OverviewCommands::Summary => cli::overview::summary(&opts).await,
        },
        Commands::Impersonate(impersonate_cmd) => match impersonate_cmd {
            ImpersonateCommands::Start { user_id, project } => {
                cli::impersonate::start(&opts, user_id, project).await
            }
            ImpersonateCommands::Stop => cli::impersonate::stop(&opts).await,
        },
        Commands::TwoFactor(two_factor_cmd) => match two_factor_cmd {
            TwoFactorCommands::Setup => cli::twofactor::setup(&opts).await,
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
