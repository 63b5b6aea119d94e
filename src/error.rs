//! Domain-specific error types for symptom-triage
//!
//! Classification and reply building never fail; errors only come from
//! loading configuration and running the HTTP listener.

use thiserror::Error;

/// Main error type for the triage service
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP server error: {message}")]
    Server { message: String },
}

impl From<toml::de::Error> for TriageError {
    fn from(err: toml::de::Error) -> Self {
        TriageError::Config {
            message: format!("Invalid config file: {}", err),
        }
    }
}

/// Result type alias for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
