//! Registration records, one shape per role

use crate::registration::choices::{Language, Level, Position, Status};
use crate::registration::error::RegistrationError;
use crate::registration::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields every role carries.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub nom: String,
    pub email: String,
    /// Plaintext; hashing happens on the backend.
    pub mdp: String,
    pub langue: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("nom", &self.nom)
            .field("email", &self.email)
            .field("mdp", &if self.mdp.is_empty() { "" } else { "***" })
            .field("langue", &self.langue)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprenantRecord {
    #[serde(flatten)]
    pub account: Account,
    pub statut: String,
    pub niveau: String,
    pub ville: String,
    pub date_naiss: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructeurRecord {
    #[serde(flatten)]
    pub account: Account,
    pub poste: String,
    pub etablissement: String,
    pub specialite: String,
    pub niveau: String,
    pub tel: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    #[serde(flatten)]
    pub account: Account,
}

/// Form data for one role. Serializes to the backend's body shape, with the
/// role as the `role` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegistrationRecord {
    Apprenant(ApprenantRecord),
    Instructeur(InstructeurRecord),
    Admin(AdminRecord),
}

impl RegistrationRecord {
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Apprenant => RegistrationRecord::Apprenant(ApprenantRecord::default()),
            Role::Instructeur => RegistrationRecord::Instructeur(InstructeurRecord::default()),
            Role::Admin => RegistrationRecord::Admin(AdminRecord::default()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            RegistrationRecord::Apprenant(_) => Role::Apprenant,
            RegistrationRecord::Instructeur(_) => Role::Instructeur,
            RegistrationRecord::Admin(_) => Role::Admin,
        }
    }

    pub fn account(&self) -> &Account {
        match self {
            RegistrationRecord::Apprenant(r) => &r.account,
            RegistrationRecord::Instructeur(r) => &r.account,
            RegistrationRecord::Admin(r) => &r.account,
        }
    }

    pub fn email(&self) -> &str {
        &self.account().email
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        let account = self.account();
        let value = match (self, field) {
            (_, "nom") => &account.nom,
            (_, "email") => &account.email,
            (_, "mdp") => &account.mdp,
            (_, "langue") => &account.langue,
            (RegistrationRecord::Apprenant(r), "statut") => &r.statut,
            (RegistrationRecord::Apprenant(r), "niveau") => &r.niveau,
            (RegistrationRecord::Apprenant(r), "ville") => &r.ville,
            (RegistrationRecord::Apprenant(r), "dateNaiss") => &r.date_naiss,
            (RegistrationRecord::Instructeur(r), "poste") => &r.poste,
            (RegistrationRecord::Instructeur(r), "etablissement") => &r.etablissement,
            (RegistrationRecord::Instructeur(r), "specialite") => &r.specialite,
            (RegistrationRecord::Instructeur(r), "niveau") => &r.niveau,
            (RegistrationRecord::Instructeur(r), "tel") => &r.tel,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut String> {
        let slot = match (self, field) {
            (RegistrationRecord::Apprenant(r), "statut") => &mut r.statut,
            (RegistrationRecord::Apprenant(r), "niveau") => &mut r.niveau,
            (RegistrationRecord::Apprenant(r), "ville") => &mut r.ville,
            (RegistrationRecord::Apprenant(r), "dateNaiss") => &mut r.date_naiss,
            (RegistrationRecord::Instructeur(r), "poste") => &mut r.poste,
            (RegistrationRecord::Instructeur(r), "etablissement") => &mut r.etablissement,
            (RegistrationRecord::Instructeur(r), "specialite") => &mut r.specialite,
            (RegistrationRecord::Instructeur(r), "niveau") => &mut r.niveau,
            (RegistrationRecord::Instructeur(r), "tel") => &mut r.tel,
            (record, field) => {
                let account = match record {
                    RegistrationRecord::Apprenant(r) => &mut r.account,
                    RegistrationRecord::Instructeur(r) => &mut r.account,
                    RegistrationRecord::Admin(r) => &mut r.account,
                };
                match field {
                    "nom" => &mut account.nom,
                    "email" => &mut account.email,
                    "mdp" => &mut account.mdp,
                    "langue" => &mut account.langue,
                    _ => return None,
                }
            }
        };
        Some(slot)
    }

    /// Replace one field, leaving the others untouched. Values are stored as
    /// given; nothing is validated here.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), RegistrationError> {
        let role = self.role();
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(RegistrationError::UnknownField {
                role: role.as_str(),
                field: field.to_string(),
            }),
        }
    }

    /// `(field, value)` pairs in the role's display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        self.role()
            .descriptor()
            .fields
            .iter()
            .map(|f| (*f, self.get(f).unwrap_or_default()))
            .collect()
    }

    /// Fields whose value is empty or only whitespace.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Checks completeness, then that every select-style field holds one of
    /// its known options. Returns a copy with select values rewritten to
    /// their wire form (`عربى` becomes `Arabe`).
    pub fn normalized(&self) -> Result<RegistrationRecord, RegistrationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RegistrationError::Validation { missing });
        }

        let mut record = self.clone();
        match &mut record {
            RegistrationRecord::Apprenant(r) => {
                r.statut = r.statut.parse::<Status>()?.as_str().to_string();
                r.niveau = r.niveau.parse::<Level>()?.as_str().to_string();
            }
            RegistrationRecord::Instructeur(r) => {
                r.poste = r.poste.parse::<Position>()?.as_str().to_string();
                r.niveau = r.niveau.parse::<Level>()?.as_str().to_string();
            }
            RegistrationRecord::Admin(_) => {}
        }
        let account = match &mut record {
            RegistrationRecord::Apprenant(r) => &mut r.account,
            RegistrationRecord::Instructeur(r) => &mut r.account,
            RegistrationRecord::Admin(r) => &mut r.account,
        };
        account.langue = account.langue.parse::<Language>()?.as_str().to_string();
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), RegistrationError> {
        self.normalized().map(|_| ())
    }
}
