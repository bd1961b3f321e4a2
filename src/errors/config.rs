use std::env::VarError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Represents an error related to environment variables.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] VarError),

    /// Represents a value that could not be parsed into its typed form.
    #[error("Could not parse {key}: {message}")]
    Parse { key: String, message: String },
}
