//! In-memory doubles for the backend and the view layer.

use crate::registration::backend::{RegisterReply, RegisterRequest, RegistrationBackend};
use crate::registration::error::RegistrationError;
use crate::registration::role::Role;
use crate::registration::workflow::{Notification, NotificationLevel, Ui};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Check { role: Role, email: String },
    Register { role: Role, body: serde_json::Value },
}

#[derive(Debug, Clone, Copy)]
pub enum CheckBehavior {
    Exists(bool),
    Fail,
}

#[derive(Debug, Clone)]
pub enum RegisterBehavior {
    Reply(String),
    Fail,
}

pub struct FakeBackend {
    pub check: CheckBehavior,
    pub register: RegisterBehavior,
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new(check: CheckBehavior, register: RegisterBehavior) -> Self {
        Self {
            check,
            register,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(
            CheckBehavior::Exists(false),
            RegisterBehavior::Reply(r#"{"message":"ok"}"#.to_string()),
        )
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn register_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Register { .. }))
            .count()
    }
}

#[async_trait]
impl RegistrationBackend for FakeBackend {
    async fn email_exists(&self, role: Role, email: &str) -> Result<bool, RegistrationError> {
        self.calls.lock().unwrap().push(Call::Check {
            role,
            email: email.to_string(),
        });
        match self.check {
            CheckBehavior::Exists(exists) => Ok(exists),
            CheckBehavior::Fail => Err(RegistrationError::Transport("connection refused".into())),
        }
    }

    async fn register(
        &self,
        request: &RegisterRequest<'_>,
    ) -> Result<RegisterReply, RegistrationError> {
        self.calls.lock().unwrap().push(Call::Register {
            role: request.record.role(),
            body: serde_json::to_value(request).unwrap(),
        });
        match &self.register {
            RegisterBehavior::Reply(body) => Ok(RegisterReply::from_body(body)),
            RegisterBehavior::Fail => Err(RegistrationError::Transport("500 Internal Server Error".into())),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingUi {
    pub notifications: Vec<Notification>,
    pub routes: Vec<String>,
}

impl RecordingUi {
    pub fn messages(&self, level: NotificationLevel) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl Ui for RecordingUi {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn navigate(&mut self, route: &str) {
        self.routes.push(route.to_string());
    }
}
