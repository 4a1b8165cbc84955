//! Closed value sets behind the select-style fields
//! (`langue`, `statut`, `niveau`, `poste`).
//!
//! Records keep these fields as plain strings; the enums here give views the
//! list of options and let the workflow reject values outside the set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $wire:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Field name this value set belongs to.
            pub const FIELD: &'static str = $field;

            /// Value as sent to the backend.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = crate::registration::RegistrationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire $(| $alias)* => Ok($name::$variant),)+
                    other => Err(crate::registration::RegistrationError::InvalidChoice {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Preferred language of the registered user. Also selects the
    /// notification catalog.
    Language, "langue" {
        English => "Anglais" | "English" | "anglais",
        French => "Français" | "Francais" | "French" | "français",
        Arabic => "Arabe" | "عربى" | "Arabic" | "arabe",
    }
}

choice_enum! {
    /// Apprenant occupation.
    Status, "statut" {
        Engineer => "Ingénieur",
        Developer => "Développeur",
        Student => "Etudiant",
        Other => "Autre",
    }
}

choice_enum! {
    Level, "niveau" {
        Beginner => "débutant",
        Intermediate => "intermédiaire",
        Advanced => "avancé",
    }
}

choice_enum! {
    /// Instructeur position.
    Position, "poste" {
        Teacher => "enseignant",
        ProfessionalTrainer => "formateur professionnel",
        Engineer => "ingénieur",
        Other => "autre",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::French
    }
}

/// Options for a select-style field, or `None` for free-text fields.
pub fn options_for(field: &str) -> Option<Vec<&'static str>> {
    let options = match field {
        Language::FIELD => Language::ALL.iter().map(Language::as_str).collect(),
        Status::FIELD => Status::ALL.iter().map(Status::as_str).collect(),
        Level::FIELD => Level::ALL.iter().map(Level::as_str).collect(),
        Position::FIELD => Position::ALL.iter().map(Position::as_str).collect(),
        _ => return None,
    };
    Some(options)
}
