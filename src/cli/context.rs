//! Command execution context
//!
//! Resolves settings and builds the API Gateway client once, so command
//! handlers only deal with the audit itself.

use colored::Colorize;
use log::debug;

use crate::cli::{AuditArgs, GlobalOptions};
use crate::client::ApiGatewayClient;
use crate::config::{Config, Settings};
use crate::error::Result;

/// Context for command execution containing resolved settings and the client.
pub struct CommandContext {
    /// Settings merged from flags, environment and config file
    pub settings: Settings,
    /// API Gateway client bound to the resolved region and profile
    pub client: ApiGatewayClient,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Settings are resolved, and therefore validated, before any AWS client is
    /// constructed: an unsupported output format fails here without touching
    /// the network.
    pub async fn new(opts: &GlobalOptions, args: &AuditArgs) -> Result<Self> {
        let settings = Self::resolve_settings(opts, args)?;
        debug!("Resolved settings: {:?}", settings);

        if settings.region.value.is_none() {
            eprintln!(
                "{}",
                "No region specified, attempting to use your default region if configured"
                    .dimmed()
            );
        }
        if settings.profile.value.is_none() {
            eprintln!(
                "{}",
                "No AWS profile specified, attempting to use your default profile if configured"
                    .dimmed()
            );
        }

        let client = ApiGatewayClient::connect(&settings.connect_options()).await;

        Ok(Self { settings, client })
    }

    /// Load the config file (if any) and merge command-line overrides over it.
    pub fn resolve_settings(opts: &GlobalOptions, args: &AuditArgs) -> Result<Settings> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        Settings::resolve(&opts.overrides(args), &config)
    }
}
