pub mod registration;

pub use registration::{
    ClientConfig, HttpBackend, RegistrationBackend, RegistrationError, RegistrationRecord, Role,
    RoleSelector, SubmissionWorkflow,
};
