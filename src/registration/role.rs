//! Roles and their descriptors
//!
//! A [`RoleDescriptor`] bundles everything that differs between the three
//! registration flows: backend endpoints, the view route and the field
//! schema. The workflow is written once against the descriptor.

use crate::registration::error::RegistrationError;
use crate::registration::record::RegistrationRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Apprenant,
    Instructeur,
    Admin,
}

#[derive(Debug)]
pub struct RoleDescriptor {
    pub role: Role,
    pub check_email_path: &'static str,
    pub register_path: &'static str,
    /// View route of the role's form.
    pub route: &'static str,
    /// Editable fields, in display order.
    pub fields: &'static [&'static str],
}

static APPRENANT: RoleDescriptor = RoleDescriptor {
    role: Role::Apprenant,
    check_email_path: "/api/checkEmailExistsA",
    register_path: "/api/registerA",
    route: "/inscrire/apprenant",
    fields: &[
        "nom", "email", "mdp", "langue", "statut", "niveau", "ville", "dateNaiss",
    ],
};

static INSTRUCTEUR: RoleDescriptor = RoleDescriptor {
    role: Role::Instructeur,
    check_email_path: "/api/checkEmailExistsI",
    register_path: "/api/registerI",
    route: "/inscrire/instructeur",
    fields: &[
        "nom",
        "email",
        "mdp",
        "langue",
        "poste",
        "etablissement",
        "specialite",
        "niveau",
        "tel",
    ],
};

static ADMIN: RoleDescriptor = RoleDescriptor {
    role: Role::Admin,
    check_email_path: "/api/checkEmailExistsAd",
    register_path: "/api/registerAd",
    route: "/inscrire/admin",
    fields: &["nom", "email", "mdp", "langue"],
};

impl Role {
    pub const ALL: [Role; 3] = [Role::Apprenant, Role::Instructeur, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Apprenant => "apprenant",
            Role::Instructeur => "instructeur",
            Role::Admin => "admin",
        }
    }

    pub fn descriptor(&self) -> &'static RoleDescriptor {
        match self {
            Role::Apprenant => &APPRENANT,
            Role::Instructeur => &INSTRUCTEUR,
            Role::Admin => &ADMIN,
        }
    }
}

impl RoleDescriptor {
    pub fn empty_record(&self) -> RegistrationRecord {
        RegistrationRecord::empty(self.role)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }
}

impl FromStr for Role {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apprenant" | "student" => Ok(Role::Apprenant),
            "instructeur" | "instructor" => Ok(Role::Instructeur),
            "admin" => Ok(Role::Admin),
            _ => Err(RegistrationError::InvalidRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
