//! Error types for user registration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Validation error: empty fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Backend request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown field '{field}' for role {role}")]
    UnknownField { role: &'static str, field: String },

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("No role selected")]
    NoRoleSelected,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RegistrationError {
    /// True for errors caused by the backend being unreachable or misbehaving.
    pub fn is_transport(&self) -> bool {
        matches!(self, RegistrationError::Transport(_) | RegistrationError::Http(_))
    }
}
