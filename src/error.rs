//! Error types for apigw-audit

use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Failures raised by the API Gateway collaborator
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authorized to read API Gateway. Check your AWS credentials and IAM permissions.")]
    Unauthorized,

    #[error("API Gateway throttled the request: {0}")]
    RateLimited(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("API Gateway error: {0}")]
    Provider(String),
}

/// Failures raised while assembling or rendering a report
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Malformed method record on resource '{path}' ({method}): missing '{field}'")]
    MalformedRecord {
        path: String,
        method: String,
        field: &'static str,
    },

    #[error(
        "API '{api_id}' has no resources to report in CSV format and the missing-resources policy is 'fail'. Drop --strict and set preferences.missing_resources to 'skip' to skip such APIs."
    )]
    MissingResources { api_id: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `apigw-audit init` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Unsupported output format '{0}'. Expected one of: json, json-pretty, csv")]
    UnsupportedFormat(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
