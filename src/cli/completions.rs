//! Dynamic shell completions
//!
//! Offers HTTP verbs for `--methods` and AWS profile names for `--profile`.
//! Profile names come from the shared AWS config files; no network calls are
//! made at completion time.
//!
//! Shell support:
//! - Fish/Zsh: Full support with descriptions
//! - Bash: Values only (no description display)

use std::path::PathBuf;

use clap_complete::engine::{ArgValueCandidates, CompletionCandidate};

/// HTTP verbs API Gateway accepts as `httpMethod`
const HTTP_METHODS: &[(&str, &str)] = &[
    ("GET", "read"),
    ("POST", "create"),
    ("PUT", "replace"),
    ("PATCH", "update"),
    ("DELETE", "remove"),
    ("HEAD", "headers only"),
    ("OPTIONS", "CORS preflight"),
    ("ANY", "catch-all method"),
];

/// Complete HTTP verbs for the method filter.
pub fn complete_http_methods() -> Vec<CompletionCandidate> {
    HTTP_METHODS
        .iter()
        .map(|(verb, help)| CompletionCandidate::new(*verb).help(Some((*help).into())))
        .collect()
}

/// Complete AWS profile names from `~/.aws/config` and `~/.aws/credentials`.
///
/// Honors `AWS_CONFIG_FILE` and `AWS_SHARED_CREDENTIALS_FILE`. Unreadable files
/// are skipped; completions should never break the shell.
pub fn complete_profiles() -> Vec<CompletionCandidate> {
    let mut names = Vec::new();

    if let Some(path) = aws_file("AWS_CONFIG_FILE", "config") {
        if let Ok(contents) = std::fs::read_to_string(path) {
            names.extend(profile_names(&contents, true));
        }
    }
    if let Some(path) = aws_file("AWS_SHARED_CREDENTIALS_FILE", "credentials") {
        if let Ok(contents) = std::fs::read_to_string(path) {
            names.extend(profile_names(&contents, false));
        }
    }

    names.sort();
    names.dedup();
    names.into_iter().map(CompletionCandidate::new).collect()
}

fn aws_file(env_var: &str, file_name: &str) -> Option<PathBuf> {
    match std::env::var_os(env_var) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::home_dir().map(|home| home.join(".aws").join(file_name)),
    }
}

/// Extract profile names from INI section headers.
///
/// In the config file profiles are `[profile name]` except `[default]`; in the
/// credentials file every section is a profile.
fn profile_names(contents: &str, config_file: bool) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| {
            let section = line.trim().strip_prefix('[')?.strip_suffix(']')?.trim();
            if !config_file || section == "default" {
                return Some(section.to_string());
            }
            section
                .strip_prefix("profile ")
                .map(|name| name.trim().to_string())
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Create completion candidates for HTTP verbs.
pub fn http_method_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_http_methods)
}

/// Create completion candidates for AWS profiles.
pub fn profile_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_profiles)
}
