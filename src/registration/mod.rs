//! Multi-role user registration client

pub mod backend;
pub mod choices;
pub mod config;
pub mod email_check;
pub mod error;
pub mod form;
pub mod messages;
pub mod record;
pub mod role;
pub mod selector;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{HttpBackend, RegisterReply, RegisterRequest, RegistrationBackend, EMAIL_TAKEN_SENTINEL};
pub use choices::{Language, Level, Position, Status};
pub use config::{ClientConfig, UniquenessFailurePolicy};
pub use email_check::UniquenessChecker;
pub use error::RegistrationError;
pub use form::{FormStore, PerRole};
pub use messages::Catalog;
pub use record::{Account, AdminRecord, ApprenantRecord, InstructeurRecord, RegistrationRecord};
pub use role::{Role, RoleDescriptor};
pub use selector::RoleSelector;
pub use workflow::{Notification, NotificationLevel, SubmissionState, SubmissionWorkflow, Submitted, Ui};
