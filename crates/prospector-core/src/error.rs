use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised by domain constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid search parameters: {0}")]
    InvalidSearchParams(String),
}
