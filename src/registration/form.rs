//! Per-role form state

use crate::registration::error::RegistrationError;
use crate::registration::record::RegistrationRecord;
use crate::registration::role::Role;

/// One value per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerRole<T> {
    pub apprenant: T,
    pub instructeur: T,
    pub admin: T,
}

impl<T> PerRole<T> {
    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self {
            apprenant: f(Role::Apprenant),
            instructeur: f(Role::Instructeur),
            admin: f(Role::Admin),
        }
    }

    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Apprenant => &self.apprenant,
            Role::Instructeur => &self.instructeur,
            Role::Admin => &self.admin,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Apprenant => &mut self.apprenant,
            Role::Instructeur => &mut self.instructeur,
            Role::Admin => &mut self.admin,
        }
    }
}

/// Holds the in-progress record of every role. Records of different roles
/// never affect each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStore {
    records: PerRole<RegistrationRecord>,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            records: PerRole::from_fn(RegistrationRecord::empty),
        }
    }

    pub fn record(&self, role: Role) -> &RegistrationRecord {
        self.records.get(role)
    }

    pub fn record_mut(&mut self, role: Role) -> &mut RegistrationRecord {
        self.records.get_mut(role)
    }

    pub fn set_field(
        &mut self,
        role: Role,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), RegistrationError> {
        self.records.get_mut(role).set(field, value)
    }

    pub fn reset(&mut self, role: Role) {
        *self.records.get_mut(role) = role.descriptor().empty_record();
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
