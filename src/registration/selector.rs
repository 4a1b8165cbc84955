//! Role selection
//!
//! Owns the form store and one workflow per role, and routes field edits
//! and submissions to whichever role is selected.

use crate::registration::backend::RegistrationBackend;
use crate::registration::choices::Language;
use crate::registration::config::ClientConfig;
use crate::registration::error::RegistrationError;
use crate::registration::form::{FormStore, PerRole};
use crate::registration::messages::Catalog;
use crate::registration::record::RegistrationRecord;
use crate::registration::role::{Role, RoleDescriptor};
use crate::registration::workflow::{SubmissionWorkflow, Submitted, Ui};
use std::sync::Arc;
use tracing::debug;

pub struct RoleSelector {
    selected: Option<Role>,
    form: FormStore,
    workflows: PerRole<SubmissionWorkflow>,
}

impl RoleSelector {
    pub fn new(backend: Arc<dyn RegistrationBackend>, config: &ClientConfig) -> Self {
        Self {
            selected: None,
            form: FormStore::new(),
            workflows: PerRole::from_fn(|role| {
                SubmissionWorkflow::new(role, backend.clone(), config)
            }),
        }
    }

    /// Make `role` active. Records of the other roles are kept as they are.
    pub fn select(&mut self, role: Role) -> &'static RoleDescriptor {
        debug!("Selected role {}", role);
        self.selected = Some(role);
        role.descriptor()
    }

    /// Switch the language of notification texts for every role.
    pub fn set_ui_language(&mut self, language: Language) {
        debug!("UI language set to {}", language);
        for role in Role::ALL {
            self.workflows
                .get_mut(role)
                .set_catalog(Catalog::for_language(language));
        }
    }

    pub fn selected(&self) -> Option<Role> {
        self.selected
    }

    fn active(&self) -> Result<Role, RegistrationError> {
        self.selected.ok_or(RegistrationError::NoRoleSelected)
    }

    pub fn active_record(&self) -> Option<&RegistrationRecord> {
        self.selected.map(|role| self.form.record(role))
    }

    pub fn form(&self) -> &FormStore {
        &self.form
    }

    pub fn workflow(&self, role: Role) -> &SubmissionWorkflow {
        self.workflows.get(role)
    }

    /// Field edit on the active role's record.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), RegistrationError> {
        let role = self.active()?;
        self.form.set_field(role, field, value)
    }

    /// Submit the active role's record through that role's workflow.
    pub async fn submit<U: Ui + ?Sized>(&mut self, ui: &mut U) -> Result<Submitted, RegistrationError> {
        let role = self.active()?;
        let record = self.form.record_mut(role);
        self.workflows.get_mut(role).submit(record, ui).await
    }
}
