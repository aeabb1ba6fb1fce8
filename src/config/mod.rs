//! Configuration management for apigw-audit
//!
//! Settings resolve with the precedence: CLI flag or environment variable >
//! config file > built-in default.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audit::MethodFilter;
use crate::cli::OutputFormat;
use crate::client::apigateway::ConnectOptions;
use crate::error::{ConfigError, Result};
use crate::output::MissingResources;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// AWS region to audit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Named AWS profile from the shared config files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// API Gateway endpoint override (local stacks, VPC endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Report preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Report preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format (json, json-pretty, csv)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// HTTP verbs to audit; unset audits every verb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,

    /// CSV handling of APIs without resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_resources: Option<MissingResources>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".apigw-audit").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, failing if the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, treating a missing file as an empty config
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

/// Where a resolved setting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Command-line flag or environment variable
    Flag,
    /// Config file
    File,
    /// Built-in default
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Flag => write!(f, "flag/env"),
            Source::File => write!(f, "config file"),
            Source::Default => write!(f, "default"),
        }
    }
}

/// A setting value together with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Resolved<T> {
    fn pick(flag: Option<T>, file: Option<T>, default: T) -> Self {
        match (flag, file) {
            (Some(value), _) => Self {
                value,
                source: Source::Flag,
            },
            (None, Some(value)) => Self {
                value,
                source: Source::File,
            },
            (None, None) => Self {
                value: default,
                source: Source::Default,
            },
        }
    }
}

/// Command-line layer of the settings, already merged with environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub methods: Vec<String>,
    pub strict: bool,
}

/// Fully resolved settings for one audit run
#[derive(Debug, Clone)]
pub struct Settings {
    pub region: Resolved<Option<String>>,
    pub profile: Resolved<Option<String>>,
    pub endpoint_url: Resolved<Option<String>>,
    pub format: Resolved<OutputFormat>,
    pub methods: Resolved<Vec<String>>,
    pub missing_resources: Resolved<MissingResources>,
}

impl Settings {
    /// Merge overrides over the config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] when the config file names an
    /// unknown output format.
    pub fn resolve(overrides: &Overrides, config: &Config) -> Result<Self> {
        let file_format = config
            .preferences
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()?;

        let flag_methods = (!overrides.methods.is_empty()).then(|| overrides.methods.clone());
        let strict = overrides.strict.then_some(MissingResources::Fail);

        Ok(Self {
            region: Resolved::pick(
                overrides.region.clone().map(Some),
                config.region.clone().map(Some),
                None,
            ),
            profile: Resolved::pick(
                overrides.profile.clone().map(Some),
                config.profile.clone().map(Some),
                None,
            ),
            endpoint_url: Resolved::pick(
                overrides.endpoint_url.clone().map(Some),
                config.endpoint_url.clone().map(Some),
                None,
            ),
            format: Resolved::pick(overrides.format, file_format, OutputFormat::default()),
            methods: Resolved::pick(flag_methods, config.preferences.methods.clone(), Vec::new()),
            missing_resources: Resolved::pick(
                strict,
                config.preferences.missing_resources,
                MissingResources::default(),
            ),
        })
    }

    /// Method allow-list for the collector
    pub fn method_filter(&self) -> MethodFilter {
        if self.methods.value.is_empty() {
            return MethodFilter::all();
        }
        MethodFilter::new(self.methods.value.iter().cloned())
    }

    /// Connection settings for the AWS SDK
    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            region: self.region.value.clone(),
            profile: self.profile.value.clone(),
            endpoint_url: self.endpoint_url.value.clone(),
        }
    }
}
