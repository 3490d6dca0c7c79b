//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Commerce API base URL must start with http:// or https://")]
    InvalidApiBaseUrl,

    #[error("Commerce API base URL must use HTTPS in production")]
    ApiBaseUrlMustBeHttps,

    #[error("Session secret must be at least 32 bytes in production")]
    SessionSecretTooShort,

    #[error("Session TTL must be at least one hour")]
    InvalidSessionTtl,

    #[error("Paths must be absolute (start with '/')")]
    PathMustBeAbsolute,

    #[error("Sign-in path must be a member of the public paths")]
    SignInPathNotPublic,
}
