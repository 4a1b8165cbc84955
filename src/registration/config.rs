//! Configuration for the registration client

use crate::registration::choices::Language;
use crate::registration::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// What the uniqueness check does when the backend cannot answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UniquenessFailurePolicy {
    /// Log and treat the email as not registered.
    #[default]
    FailOpen,
    /// Abort the submission with a transport error.
    FailClosed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// View shown after a successful registration.
    pub login_route: String,
    /// Language of notification texts.
    pub ui_language: Language,
    pub uniqueness_failure: UniquenessFailurePolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_ui_language(mut self, language: Language) -> Self {
        self.ui_language = language;
        self
    }

    pub fn with_uniqueness_failure(mut self, policy: UniquenessFailurePolicy) -> Self {
        self.uniqueness_failure = policy;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Absolute URL of a backend path such as `/api/registerA`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, RegistrationError> {
        let config: ClientConfig = toml::from_str(text)
            .map_err(|e| RegistrationError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistrationError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(RegistrationError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), RegistrationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(RegistrationError::ConfigError(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(RegistrationError::ConfigError(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_ms: 10_000,
            login_route: "/login".to_string(),
            ui_language: Language::default(),
            uniqueness_failure: UniquenessFailurePolicy::default(),
        }
    }
}
