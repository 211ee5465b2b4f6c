//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use instance::InstanceActionArg;

pub mod args;
pub mod completions;
pub mod context;
pub mod floatingip;
pub mod impersonate;
pub mod instance;
pub mod login;
pub mod logout;
pub mod network;
pub mod overview;
pub mod project;
pub mod status;
pub mod twofactor;
pub mod user;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// PortalOps CLI - Command-line companion for the OpenStack VPS portal
#[derive(Parser, Debug)]
#[command(name = "portalops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "PORTALOPS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override portal API base URL
    #[arg(long, global = true, env = "PORTALOPS_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "PORTALOPS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PORTALOPS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the portal
    #[command(after_help = "EXAMPLES:\n  \
        portalops login                            # Prompt for everything\n  \
        portalops login -u alice@example.com       # Prompt for password only\n  \
        portalops login -u alice --project 42      # Skip the project picker")]
    Login {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Project ID to scope the session to (skips the picker)
        #[arg(long)]
        project: Option<i64>,
    },

    /// Sign out and clear stored credentials
    Logout,

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage compute instances
    #[command(subcommand)]
    Instance(InstanceCommands),

    /// Manage project networks
    #[command(subcommand)]
    Network(NetworkCommands),

    /// Manage floating IPs
    #[command(subcommand)]
    FloatingIp(FloatingIpCommands),

    /// Inspect and switch projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// List portal users
    #[command(subcommand)]
    User(UserCommands),

    /// Show quota and resource usage
    #[command(subcommand)]
    Overview(OverviewCommands),

    /// Act on the portal as another user (admin only)
    #[command(subcommand)]
    Impersonate(ImpersonateCommands),

    /// Manage two-factor authentication
    #[command(subcommand, name = "2fa")]
    TwoFactor(TwoFactorCommands),

    /// Generate shell completions
    #[command(after_help = "\
EXAMPLES:
  bash:   portalops completion bash > /etc/bash_completion.d/portalops
  zsh:    portalops completion zsh > \"${fpath[1]}/_portalops\"
  fish:   portalops completion fish > ~/.config/fish/completions/portalops.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Instance management subcommands
#[derive(Subcommand, Debug)]
pub enum InstanceCommands {
    /// List instances in the active project
    List {
        /// List across all projects (requires admin)
        #[arg(long)]
        admin: bool,
    },

    /// Start, stop, or reboot an instance
    #[command(after_help = "EXAMPLES:\n  \
        portalops instance action vm-1a2b stop\n  \
        portalops instance action vm-1a2b reboot --admin")]
    Action {
        /// Instance ID
        id: String,

        /// Power action to run
        #[arg(value_enum)]
        action: InstanceActionArg,

        /// Act outside the active project (requires admin)
        #[arg(long)]
        admin: bool,
    },

    /// Get a one-time noVNC console URL for an instance
    Console {
        /// Instance ID
        id: String,

        /// Act outside the active project (requires admin)
        #[arg(long)]
        admin: bool,
    },
}

/// Network management subcommands
#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// List project networks
    List,

    /// Create a network with one subnet
    #[command(after_help = "EXAMPLES:\n  \
        portalops network create backend 10.1.0.0/24\n  \
        portalops network create backend 10.1.0.0/24 --gateway 10.1.0.1\n  \
        portalops network create isolated 10.2.0.0/24 --no-dhcp")]
    Create {
        /// Network name
        name: String,

        /// Subnet CIDR, e.g. 10.1.0.0/24
        cidr: String,

        /// Gateway IP (portal picks one when omitted)
        #[arg(long)]
        gateway: Option<String>,

        /// Disable DHCP on the subnet
        #[arg(long)]
        no_dhcp: bool,
    },

    /// List the ports attached to a network
    Ports {
        /// Network ID
        network_id: String,
    },
}

/// Floating IP subcommands
#[derive(Subcommand, Debug)]
pub enum FloatingIpCommands {
    /// List floating IPs
    List,

    /// Show every floating and fixed IP in the project
    Inventory,

    /// Allocate a new floating IP from the pool
    Allocate,

    /// Attach a floating IP to an instance
    Assign {
        /// Floating IP ID
        ip_id: String,

        /// Instance ID to attach to
        vm_id: String,
    },

    /// Detach a floating IP from its instance
    Unassign {
        /// Floating IP ID
        ip_id: String,
    },

    /// Return a floating IP to the pool
    Release {
        /// Floating IP ID
        ip_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List accessible projects
    List,

    /// Show project details
    Get {
        /// Project ID
        id: i64,
    },

    /// Re-scope the session to another project
    Switch {
        /// Project ID to switch to
        id: i64,
    },

    /// List available VPS packages
    Packages,

    /// Move a project to a different VPS package
    ChangePackage {
        /// Project ID
        project_id: i64,

        /// Target package ID
        package_id: i64,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List portal users
    List,
}

/// Overview subcommands
#[derive(Subcommand, Debug)]
pub enum OverviewCommands {
    /// Show quota limits and current usage
    Limits,

    /// Show per-resource usage details
    Resources,

    /// Portal-wide usage summary (requires admin)
    Summary,
}

/// Impersonation subcommands
#[derive(Subcommand, Debug)]
pub enum ImpersonateCommands {
    /// Start acting as another user
    Start {
        /// User ID to impersonate
        user_id: i64,

        /// Project to scope the impersonated session to
        #[arg(long)]
        project: Option<i64>,
    },

    /// Stop impersonating and return to your own session
    Stop,
}

/// Two-factor authentication subcommands
#[derive(Subcommand, Debug)]
pub enum TwoFactorCommands {
    /// Enroll this account in two-factor authentication
    Setup,
}
