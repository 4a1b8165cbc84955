//! HTTP backend for registration
//!
//! The backend exposes one email-check and one register endpoint per role
//! (see [`RoleDescriptor`](crate::registration::RoleDescriptor)). The
//! register endpoint answers a taken email with a bare sentinel string
//! instead of an error status.

use crate::registration::config::ClientConfig;
use crate::registration::error::RegistrationError;
use crate::registration::record::RegistrationRecord;
use crate::registration::role::Role;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Body the register endpoints return when the email is already taken.
pub const EMAIL_TAKEN_SENTINEL: &str = "Email déjà existant";

#[derive(Debug, Serialize)]
pub struct EmailCheckRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct EmailCheckResponse {
    #[serde(default)]
    pub exists: bool,
}

/// Register body: the role's record plus a client-generated id.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: &'a RegistrationRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterReply {
    /// Anything other than the sentinel; carries the raw body.
    Created(String),
    EmailTaken,
}

impl RegisterReply {
    /// The sentinel may arrive as raw text or as a JSON string.
    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        let is_sentinel = body == EMAIL_TAKEN_SENTINEL
            || serde_json::from_str::<String>(body)
                .map(|s| s == EMAIL_TAKEN_SENTINEL)
                .unwrap_or(false);

        if is_sentinel {
            RegisterReply::EmailTaken
        } else {
            RegisterReply::Created(body.to_string())
        }
    }
}

#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Whether `email` is already registered for `role`.
    async fn email_exists(&self, role: Role, email: &str) -> Result<bool, RegistrationError>;

    async fn register(
        &self,
        request: &RegisterRequest<'_>,
    ) -> Result<RegisterReply, RegistrationError>;
}

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self, RegistrationError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                RegistrationError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl RegistrationBackend for HttpBackend {
    async fn email_exists(&self, role: Role, email: &str) -> Result<bool, RegistrationError> {
        let url = self.config.endpoint(role.descriptor().check_email_path);
        debug!("Checking email for {} at {}", role, url);

        let response: EmailCheckResponse = self
            .client
            .post(&url)
            .json(&EmailCheckRequest { email })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.exists)
    }

    async fn register(
        &self,
        request: &RegisterRequest<'_>,
    ) -> Result<RegisterReply, RegistrationError> {
        let role = request.record.role();
        let url = self.config.endpoint(role.descriptor().register_path);
        debug!("Registering {} {} at {}", role, request.id, url);

        let body = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(RegisterReply::from_body(&body))
    }
}
