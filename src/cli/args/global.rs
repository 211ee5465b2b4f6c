//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// This struct consolidates all global flags from the CLI into a single unit,
/// making handler signatures cleaner. When new global options are added, only
/// this struct and `main.rs` need to change.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable >
/// config file > default. This struct captures the CLI/env layer; config
/// file preferences are resolved later in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format, when given on the command line
    pub format: Option<OutputFormat>,

    /// Portal API base URL override (bypasses config file)
    pub api_url: Option<String>,

    /// Custom config file path (defaults to ~/.portalops/config.yaml)
    pub config: Option<String>,

    /// Debug logging enabled
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_url: cli.api_url.clone(),
            config: cli.config.clone(),
            debug: cli.debug,
        }
    }

    /// Get the API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Get the config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
