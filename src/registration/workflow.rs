//! Registration submission workflow
//!
//! validate -> check email -> register -> notify/navigate/reset.
//! One instance per role; `submit` takes `&mut self`, so a workflow never
//! runs two submissions at once.

use crate::registration::backend::{RegisterReply, RegisterRequest, RegistrationBackend};
use crate::registration::config::ClientConfig;
use crate::registration::email_check::UniquenessChecker;
use crate::registration::error::RegistrationError;
use crate::registration::messages::Catalog;
use crate::registration::record::RegistrationRecord;
use crate::registration::role::{Role, RoleDescriptor};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    CheckingUniqueness,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// The view layer as seen by the workflow: toasts and navigation.
pub trait Ui {
    fn notify(&mut self, notification: Notification);
    fn navigate(&mut self, route: &str);
}

/// A registration the backend accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    /// Raw response body.
    pub response: String,
}

pub struct SubmissionWorkflow {
    descriptor: &'static RoleDescriptor,
    backend: Arc<dyn RegistrationBackend>,
    checker: UniquenessChecker,
    catalog: Catalog,
    login_route: String,
    state: SubmissionState,
}

impl SubmissionWorkflow {
    pub fn new(role: Role, backend: Arc<dyn RegistrationBackend>, config: &ClientConfig) -> Self {
        let checker = UniquenessChecker::new(backend.clone(), config.uniqueness_failure);
        Self {
            descriptor: role.descriptor(),
            backend,
            checker,
            catalog: Catalog::for_language(config.ui_language),
            login_route: config.login_route.clone(),
            state: SubmissionState::Idle,
        }
    }

    pub fn role(&self) -> Role {
        self.descriptor.role
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("{} submission: {:?} -> {:?}", self.role(), self.state, next);
        self.state = next;
    }

    /// Run one submission of `record`.
    ///
    /// Every outcome is reported to `ui`. On success the user is sent to the
    /// login view and `record` is reset; on failure both are left alone.
    pub async fn submit<U: Ui + ?Sized>(
        &mut self,
        record: &mut RegistrationRecord,
        ui: &mut U,
    ) -> Result<Submitted, RegistrationError> {
        match self.run(record).await {
            Ok(submitted) => {
                self.transition(SubmissionState::Succeeded);
                info!(
                    "Registered {} '{}' with id {}",
                    submitted.role, submitted.email, submitted.id
                );
                ui.notify(Notification::success(self.catalog.success(self.role())));
                ui.navigate(&self.login_route);
                *record = self.descriptor.empty_record();
                Ok(submitted)
            }
            Err(e) => {
                self.transition(SubmissionState::Failed);
                if e.is_transport() {
                    error!("{} registration failed: {}", self.role(), e);
                } else {
                    warn!("{} registration rejected: {}", self.role(), e);
                }
                ui.notify(Notification::error(self.message_for(&e)));
                Err(e)
            }
        }
    }

    async fn run(&mut self, record: &RegistrationRecord) -> Result<Submitted, RegistrationError> {
        if record.role() != self.role() {
            return Err(RegistrationError::InvalidRole(format!(
                "{} record submitted to the {} workflow",
                record.role(),
                self.role()
            )));
        }

        self.transition(SubmissionState::Validating);
        let record = record.normalized()?;

        self.transition(SubmissionState::CheckingUniqueness);
        let email = record.email();
        if self.checker.email_exists(self.role(), email).await? {
            return Err(RegistrationError::DuplicateEmail(email.to_string()));
        }

        self.transition(SubmissionState::Submitting);
        let request = RegisterRequest {
            id: Uuid::new_v4(),
            record: &record,
        };
        match self.backend.register(&request).await? {
            RegisterReply::EmailTaken => Err(RegistrationError::DuplicateEmail(email.to_string())),
            RegisterReply::Created(response) => Ok(Submitted {
                id: request.id,
                role: self.role(),
                email: email.to_string(),
                response,
            }),
        }
    }

    fn message_for(&self, e: &RegistrationError) -> &'static str {
        match e {
            RegistrationError::Validation { .. } => self.catalog.missing_fields(),
            RegistrationError::InvalidChoice { .. } => self.catalog.invalid_choice(),
            RegistrationError::DuplicateEmail(_) => self.catalog.email_taken(),
            _ => self.catalog.failure(self.role()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::choices::Language;
    use crate::registration::config::UniquenessFailurePolicy;
    use crate::registration::testing::{
        Call, CheckBehavior, FakeBackend, RecordingUi, RegisterBehavior,
    };

    fn filled(role: Role) -> RegistrationRecord {
        let mut record = RegistrationRecord::empty(role);
        for field in role.descriptor().fields {
            let value = match *field {
                "email" => "user@x.com",
                "langue" => "Français",
                "statut" => "Etudiant",
                "niveau" => "avancé",
                "poste" => "enseignant",
                _ => "value",
            };
            record.set(field, value).unwrap();
        }
        record
    }

    fn ali() -> RegistrationRecord {
        let mut record = RegistrationRecord::empty(Role::Apprenant);
        for (field, value) in [
            ("nom", "Ali"),
            ("email", "ali@x.com"),
            ("mdp", "secret"),
            ("langue", "Français"),
            ("statut", "Etudiant"),
            ("niveau", "débutant"),
            ("ville", "Tunis"),
            ("dateNaiss", "2000-01-01"),
        ] {
            record.set(field, value).unwrap();
        }
        record
    }

    fn workflow(role: Role, backend: &Arc<FakeBackend>) -> SubmissionWorkflow {
        SubmissionWorkflow::new(role, backend.clone(), &ClientConfig::default())
    }

    #[tokio::test]
    async fn empty_field_never_reaches_the_network() {
        for role in Role::ALL {
            for field in role.descriptor().fields {
                let backend = Arc::new(FakeBackend::accepting());
                let mut wf = workflow(role, &backend);
                let mut record = filled(role);
                record.set(field, "").unwrap();
                let mut ui = RecordingUi::default();

                let err = wf.submit(&mut record, &mut ui).await.unwrap_err();

                assert!(matches!(err, RegistrationError::Validation { .. }));
                assert!(backend.calls().is_empty(), "{role}/{field} hit the backend");
                assert_eq!(
                    ui.messages(NotificationLevel::Error),
                    vec!["Veuillez remplir tous les champs."]
                );
                assert_eq!(wf.state(), SubmissionState::Failed);
            }
        }
    }

    #[tokio::test]
    async fn taken_email_skips_register() {
        for role in Role::ALL {
            let backend = Arc::new(FakeBackend::new(
                CheckBehavior::Exists(true),
                RegisterBehavior::Reply("ok".into()),
            ));
            let mut wf = workflow(role, &backend);
            let mut record = filled(role);
            let before = record.clone();
            let mut ui = RecordingUi::default();

            let err = wf.submit(&mut record, &mut ui).await.unwrap_err();

            assert!(matches!(err, RegistrationError::DuplicateEmail(_)));
            assert_eq!(backend.register_calls(), 0);
            assert_eq!(record, before);
            assert!(ui.routes.is_empty());
        }
    }

    #[tokio::test]
    async fn sentinel_reply_is_a_duplicate() {
        for role in Role::ALL {
            let backend = Arc::new(FakeBackend::new(
                CheckBehavior::Exists(false),
                RegisterBehavior::Reply("Email déjà existant".into()),
            ));
            let mut wf = workflow(role, &backend);
            let mut record = filled(role);
            let before = record.clone();
            let mut ui = RecordingUi::default();

            let err = wf.submit(&mut record, &mut ui).await.unwrap_err();

            assert!(matches!(err, RegistrationError::DuplicateEmail(_)));
            assert_eq!(backend.register_calls(), 1);
            assert_eq!(record, before);
            assert!(ui.routes.is_empty());
            assert_eq!(
                ui.messages(NotificationLevel::Error),
                vec!["L'adresse e-mail existe déjà. Merci de la changer."]
            );
        }
    }

    #[tokio::test]
    async fn success_resets_navigates_and_notifies_once() {
        for role in Role::ALL {
            let backend = Arc::new(FakeBackend::accepting());
            let mut wf = workflow(role, &backend);
            let mut record = filled(role);
            let mut ui = RecordingUi::default();

            let submitted = wf.submit(&mut record, &mut ui).await.unwrap();

            assert_eq!(submitted.role, role);
            assert_eq!(record, RegistrationRecord::empty(role));
            assert_eq!(ui.routes, vec!["/login".to_string()]);
            assert_eq!(ui.notifications.len(), 1);
            assert_eq!(
                ui.messages(NotificationLevel::Success),
                vec![Catalog::default().success(role)]
            );
            assert_eq!(wf.state(), SubmissionState::Succeeded);
        }
    }

    #[tokio::test]
    async fn register_body_carries_record_and_generated_id() {
        let backend = Arc::new(FakeBackend::accepting());
        let mut wf = workflow(Role::Apprenant, &backend);
        let mut ui = RecordingUi::default();

        let submitted = wf.submit(&mut ali(), &mut ui).await.unwrap();

        let calls = backend.calls();
        assert_eq!(
            calls[0],
            Call::Check {
                role: Role::Apprenant,
                email: "ali@x.com".into()
            }
        );
        match &calls[1] {
            Call::Register { role, body } => {
                assert_eq!(*role, Role::Apprenant);
                assert_eq!(body["id"], submitted.id.to_string());
                assert_eq!(body["nom"], "Ali");
                assert_eq!(body["dateNaiss"], "2000-01-01");
                assert_eq!(body["role"], "apprenant");
            }
            other => panic!("expected register call, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_check_proceeds_when_fail_open() {
        let backend = Arc::new(FakeBackend::new(
            CheckBehavior::Fail,
            RegisterBehavior::Reply("created".into()),
        ));
        let mut wf = workflow(Role::Apprenant, &backend);
        let mut record = ali();
        let mut ui = RecordingUi::default();

        wf.submit(&mut record, &mut ui).await.unwrap();

        assert_eq!(backend.register_calls(), 1);
        assert_eq!(ui.routes, vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn failed_check_aborts_when_fail_closed() {
        let backend = Arc::new(FakeBackend::new(
            CheckBehavior::Fail,
            RegisterBehavior::Reply("created".into()),
        ));
        let config = ClientConfig::default()
            .with_uniqueness_failure(UniquenessFailurePolicy::FailClosed);
        let mut wf = SubmissionWorkflow::new(Role::Instructeur, backend.clone(), &config);
        let mut record = filled(Role::Instructeur);
        let mut ui = RecordingUi::default();

        let err = wf.submit(&mut record, &mut ui).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(backend.register_calls(), 0);
        assert_eq!(
            ui.messages(NotificationLevel::Error),
            vec!["Erreur lors de l'inscription instructeur"]
        );
    }

    #[tokio::test]
    async fn transport_failure_keeps_record_and_reports_role_message() {
        let backend = Arc::new(FakeBackend::new(
            CheckBehavior::Exists(false),
            RegisterBehavior::Fail,
        ));
        let config = ClientConfig::default().with_ui_language(Language::English);
        let mut wf = SubmissionWorkflow::new(Role::Admin, backend.clone(), &config);
        let mut record = filled(Role::Admin);
        let before = record.clone();
        let mut ui = RecordingUi::default();

        let err = wf.submit(&mut record, &mut ui).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(record, before);
        assert!(ui.routes.is_empty());
        assert_eq!(
            ui.messages(NotificationLevel::Error),
            vec!["Administrator registration failed"]
        );
    }

    #[tokio::test]
    async fn record_of_another_role_is_refused() {
        let backend = Arc::new(FakeBackend::accepting());
        let mut wf = workflow(Role::Admin, &backend);
        let mut ui = RecordingUi::default();

        let err = wf.submit(&mut ali(), &mut ui).await.unwrap_err();

        assert!(matches!(err, RegistrationError::InvalidRole(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn select_aliases_are_sent_in_wire_form() {
        let backend = Arc::new(FakeBackend::accepting());
        let mut wf = workflow(Role::Admin, &backend);
        let mut record = filled(Role::Admin);
        record.set("langue", "عربى").unwrap();
        let mut ui = RecordingUi::default();

        wf.submit(&mut record, &mut ui).await.unwrap();

        match &backend.calls()[1] {
            Call::Register { body, .. } => assert_eq!(body["langue"], "Arabe"),
            other => panic!("expected register call, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_select_value_never_reaches_the_network() {
        let backend = Arc::new(FakeBackend::accepting());
        let mut wf = workflow(Role::Apprenant, &backend);
        let mut record = ali();
        record.set("niveau", "expert").unwrap();
        let before = record.clone();
        let mut ui = RecordingUi::default();

        let err = wf.submit(&mut record, &mut ui).await.unwrap_err();

        assert!(matches!(err, RegistrationError::InvalidChoice { field: "niveau", .. }));
        assert!(backend.calls().is_empty());
        assert_eq!(record, before);
        assert_eq!(
            ui.messages(NotificationLevel::Error),
            vec![Catalog::default().invalid_choice()]
        );
    }
}
