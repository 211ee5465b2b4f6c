//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, base URL resolution, and client initialization.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::PortalClient;
use crate::config::Config;
use crate::creds::FileStore;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime
/// options.
///
/// Construction never touches the network: the client picks credentials from
/// the store per request, refreshing on demand. A missing or expired session
/// surfaces from the first API call, not from here.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Path the configuration was loaded from (and saves go to)
    pub config_path: PathBuf,
    /// Credential slots next to the config file
    pub store: Arc<FileStore>,
    /// Portal API client (Arc-wrapped; requests may run concurrently)
    pub client: Arc<PortalClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("config", &self.config)
            .field("config_path", &self.config_path)
            .field("store", &self.store)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or the default location)
    /// - Applying the `--api-url` override if provided
    /// - Requiring a portal base URL
    /// - Creating the credential store and API client
    ///
    /// # Errors
    /// Returns an error if the config cannot be parsed or no base URL is
    /// configured.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::path_for(opts.config_ref())?;
        let mut config = Config::load_or_default(config_path.clone())?;

        // Apply API URL override if provided
        if let Some(api_url) = opts.api_url_ref() {
            config.base_url = Some(api_url.to_string());
        }

        let base_url = config.require_base_url()?.to_string();
        let store = Arc::new(FileStore::new(Config::credentials_root(&config_path)));
        let client = Arc::new(PortalClient::new(&base_url, store.clone())?);
        let format = resolve_format(opts, &config);

        Ok(Self {
            config,
            config_path,
            store,
            client,
            format,
        })
    }

    /// Persist the current configuration back to its file
    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(self.config_path.clone())
    }
}

/// Resolve the output format: CLI flag or env beats the config preference,
/// which beats the default
fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    opts.format.unwrap_or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_preference)
            .unwrap_or_default()
    })
}
