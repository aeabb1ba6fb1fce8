//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;

const FORMATS: [OutputFormat; 3] = [
    OutputFormat::Json,
    OutputFormat::JsonPretty,
    OutputFormat::Csv,
];

/// Turn a prompt answer into an optional setting; blank means unset.
fn non_blank(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Run the init command
///
/// Prompts for defaults and writes them to the config file. Existing values
/// are offered as defaults; credentials are never asked for or stored.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to apigw-audit!".bold().green());
    println!("Let's set up your audit defaults. Leave a field blank to use the AWS SDK default.\n");

    let mut config = Config::load_or_default_at(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let region: String = Input::with_theme(&theme)
        .with_prompt("Default AWS region")
        .with_initial_text(opts.region.clone().or(config.region.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let profile: String = Input::with_theme(&theme)
        .with_prompt("Default AWS profile")
        .with_initial_text(opts.profile.clone().or(config.profile.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let current_format = config
        .preferences
        .format
        .as_deref()
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or_default();
    let format_names: Vec<String> = FORMATS.iter().map(ToString::to_string).collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&format_names)
        .default(FORMATS.iter().position(|f| *f == current_format).unwrap_or(0))
        .interact()?;

    config.region = non_blank(region);
    config.profile = non_blank(profile);
    config.preferences.format = Some(FORMATS[selection].to_string());

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show resolved settings", "apigw-audit status".cyan());
    println!("  {} - Audit every REST API", "apigw-audit audit".cyan());

    Ok(())
}
