//! Status command implementation

use colored::Colorize;
use tabled::settings::object::Rows;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::{AuditArgs, CommandContext, GlobalOptions};
use crate::config::{Config, Resolved, Settings};
use crate::error::Result;

/// One resolved setting for table display
#[derive(Debug, Tabled)]
struct SettingRow {
    #[tabled(rename = "SETTING")]
    name: &'static str,
    #[tabled(rename = "VALUE")]
    value: String,
    #[tabled(rename = "SOURCE")]
    source: String,
}

impl SettingRow {
    fn new<T>(name: &'static str, setting: &Resolved<T>, display: impl Fn(&T) -> String) -> Self {
        Self {
            name,
            value: display(&setting.value),
            source: setting.source.to_string(),
        }
    }
}

fn or_sdk_default(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "(SDK default)".to_string())
}

fn setting_rows(settings: &Settings) -> Vec<SettingRow> {
    vec![
        SettingRow::new("region", &settings.region, or_sdk_default),
        SettingRow::new("profile", &settings.profile, or_sdk_default),
        SettingRow::new("endpoint_url", &settings.endpoint_url, or_sdk_default),
        SettingRow::new("format", &settings.format, |f| f.to_string()),
        SettingRow::new("methods", &settings.methods, |m| {
            if m.is_empty() {
                "(all)".to_string()
            } else {
                m.join(",")
            }
        }),
        SettingRow::new("missing_resources", &settings.missing_resources, |p| {
            format!("{:?}", p).to_lowercase()
        }),
    ]
}

/// Format the resolved settings as a table
fn format_settings(settings: &Settings) -> String {
    let mut table = Table::new(setting_rows(settings));
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "apigw-audit Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!(
            "{} Config file: {}",
            "✓".green(),
            config_path.display().to_string().cyan()
        );
    } else {
        println!(
            "{} No config file at {}",
            "○".dimmed(),
            config_path.display().to_string().cyan()
        );
        println!("  → Run '{}' to create one", "apigw-audit init".cyan());
    }
    println!();

    let settings = CommandContext::resolve_settings(opts, &AuditArgs::default())?;
    println!("{}", format_settings(&settings));
    println!();

    Ok(())
}
