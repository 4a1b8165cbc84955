//! Notification texts in the three UI languages

use crate::registration::choices::Language;
use crate::registration::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn for_language(language: Language) -> Self {
        Self { language }
    }

    pub fn missing_fields(&self) -> &'static str {
        match self.language {
            Language::French => "Veuillez remplir tous les champs.",
            Language::English => "Please fill in all fields.",
            Language::Arabic => "يرجى ملء جميع الحقول.",
        }
    }

    pub fn invalid_choice(&self) -> &'static str {
        match self.language {
            Language::French => "Une des valeurs sélectionnées est invalide.",
            Language::English => "One of the selected values is invalid.",
            Language::Arabic => "إحدى القيم المختارة غير صالحة.",
        }
    }

    pub fn email_taken(&self) -> &'static str {
        match self.language {
            Language::French => "L'adresse e-mail existe déjà. Merci de la changer.",
            Language::English => "This email address already exists. Please change it.",
            Language::Arabic => "عنوان البريد الإلكتروني موجود بالفعل. يرجى تغييره.",
        }
    }

    pub fn success(&self, role: Role) -> &'static str {
        match (self.language, role) {
            (Language::French, Role::Apprenant) => "Inscription apprenant réussie !",
            (Language::French, Role::Instructeur) => "Inscription instructeur réussie !",
            (Language::French, Role::Admin) => "Inscription administrateur réussie !",
            (Language::English, Role::Apprenant) => "Student registration successful!",
            (Language::English, Role::Instructeur) => "Instructor registration successful!",
            (Language::English, Role::Admin) => "Administrator registration successful!",
            (Language::Arabic, Role::Apprenant) => "تم تسجيل المتعلم بنجاح!",
            (Language::Arabic, Role::Instructeur) => "تم تسجيل المدرب بنجاح!",
            (Language::Arabic, Role::Admin) => "تم تسجيل المسؤول بنجاح!",
        }
    }

    pub fn failure(&self, role: Role) -> &'static str {
        match (self.language, role) {
            (Language::French, Role::Apprenant) => "Erreur lors de l'inscription apprenant",
            (Language::French, Role::Instructeur) => "Erreur lors de l'inscription instructeur",
            (Language::French, Role::Admin) => "Erreur lors de l'inscription administrateur",
            (Language::English, Role::Apprenant) => "Student registration failed",
            (Language::English, Role::Instructeur) => "Instructor registration failed",
            (Language::English, Role::Admin) => "Administrator registration failed",
            (Language::Arabic, Role::Apprenant) => "حدث خطأ أثناء تسجيل المتعلم",
            (Language::Arabic, Role::Instructeur) => "حدث خطأ أثناء تسجيل المدرب",
            (Language::Arabic, Role::Admin) => "حدث خطأ أثناء تسجيل المسؤول",
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}
