//! Global CLI options shared across all commands

use crate::cli::{AuditArgs, Cli, OutputFormat};
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
///
/// Captures the CLI/env layer only; config file values are merged later by
/// [`Settings::resolve`](crate::config::Settings::resolve).
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.apigw-audit/config.yaml)
    pub config: Option<String>,

    /// AWS region override
    pub region: Option<String>,

    /// AWS profile override
    pub profile: Option<String>,

    /// API Gateway endpoint override
    pub endpoint_url: Option<String>,

    /// Output format override
    pub format: Option<OutputFormat>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            region: cli.region.clone(),
            profile: cli.profile.clone(),
            endpoint_url: cli.endpoint_url.clone(),
            format: cli.format,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Combine with command options into the override layer of the settings.
    pub fn overrides(&self, audit: &AuditArgs) -> Overrides {
        Overrides {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            format: self.format,
            methods: audit.methods.clone(),
            strict: audit.strict,
        }
    }
}
