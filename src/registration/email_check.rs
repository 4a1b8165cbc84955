//! Email uniqueness check

use crate::registration::backend::RegistrationBackend;
use crate::registration::config::UniquenessFailurePolicy;
use crate::registration::error::RegistrationError;
use crate::registration::role::Role;
use std::sync::Arc;
use tracing::{error, warn};

/// Asks the backend whether an email is taken for a role. Advisory only:
/// the register endpoint has the final word.
#[derive(Clone)]
pub struct UniquenessChecker {
    backend: Arc<dyn RegistrationBackend>,
    policy: UniquenessFailurePolicy,
}

impl UniquenessChecker {
    pub fn new(backend: Arc<dyn RegistrationBackend>, policy: UniquenessFailurePolicy) -> Self {
        Self { backend, policy }
    }

    /// Single attempt, no retry. Under [`UniquenessFailurePolicy::FailOpen`]
    /// a failed call reports the email as free and never returns `Err`.
    pub async fn email_exists(&self, role: Role, email: &str) -> Result<bool, RegistrationError> {
        match self.backend.email_exists(role, email).await {
            Ok(exists) => Ok(exists),
            Err(e) => match self.policy {
                UniquenessFailurePolicy::FailOpen => {
                    warn!(
                        "Email check for {} failed, treating '{}' as unregistered: {}",
                        role, email, e
                    );
                    Ok(false)
                }
                UniquenessFailurePolicy::FailClosed => {
                    error!("Email check for {} failed: {}", role, e);
                    Err(e)
                }
            },
        }
    }
}
