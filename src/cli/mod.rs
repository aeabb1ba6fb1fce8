//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use completions::{http_method_candidates, profile_candidates};

pub mod args;
pub mod audit;
pub mod completions;
pub mod context;
pub mod init;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Audit how every API Gateway REST API resource and HTTP method is secured
#[derive(Parser, Debug)]
#[command(name = "apigw-audit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "APIGW_AUDIT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Print debug info to inspect API Gateway response data
    #[arg(long, short = 'd', global = true, env = "APIGW_AUDIT_DEBUG", hide_env = true)]
    pub debug: bool,

    /// AWS region to audit (defaults to the SDK region chain)
    #[arg(long, short = 'r', global = true)]
    pub region: Option<String>,

    /// AWS credentials profile to use (defaults to the SDK profile chain)
    #[arg(long, short = 'p', global = true, add = profile_candidates())]
    pub profile: Option<String>,

    /// Custom API Gateway endpoint for development/testing
    #[arg(long, global = true, env = "APIGW_AUDIT_ENDPOINT_URL", hide_env = true)]
    pub endpoint_url: Option<String>,

    /// Output format (json, json-pretty, csv) [default: json]
    #[arg(
        long,
        short = 'f',
        global = true,
        value_enum,
        env = "APIGW_AUDIT_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit every REST API in the region and print the report
    Audit(AuditArgs),

    /// Create or update the configuration file
    Init,

    /// Show resolved settings and where each one comes from
    Status,

    /// Display version information
    Version,

    /// Generate shell completions (static)
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   apigw-audit completion bash > /etc/bash_completion.d/apigw-audit
  zsh:    apigw-audit completion zsh > \"${fpath[1]}/_apigw-audit\"
  fish:   apigw-audit completion fish > ~/.config/fish/completions/apigw-audit.fish

Dynamic completions (includes HTTP verbs and AWS profile names):
  bash:   echo 'source <(COMPLETE=bash apigw-audit)' >> ~/.bashrc
  zsh:    echo 'source <(COMPLETE=zsh apigw-audit)' >> ~/.zshrc
  fish:   echo 'COMPLETE=fish apigw-audit | source' >> ~/.config/fish/config.fish")]
    Completion {
        /// Shell to generate completions for (static only)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for the audit command
///
/// Supports both repeated values and comma-separated values for `--methods`:
/// - `--methods GET POST`
/// - `--methods GET,POST`
/// - `-m GET -m POST`
#[derive(Args, Debug, Default, Clone)]
pub struct AuditArgs {
    /// HTTP methods to check (all methods when unset)
    #[arg(
        long,
        short = 'm',
        num_args = 1..,
        value_delimiter = ',',
        add = http_method_candidates()
    )]
    pub methods: Vec<String>,

    /// Fail CSV output when an API has no resources to report instead of skipping it
    #[arg(long)]
    pub strict: bool,
}
