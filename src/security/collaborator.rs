use std::sync::Arc;

use crate::security::{AuthCollaborator, Credentials};

/// Stands in for a real authentication backend: records that credentials
/// arrived, and nothing else.
pub struct LoggingCollaborator;

impl AuthCollaborator for LoggingCollaborator {
    fn submit(&self, credentials: Credentials) {
        log::info!("credentials received for {}", credentials.email);
    }
}

/// Collaborator selected through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorKind {
    Demo,
    Log,
}

impl CollaboratorKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" => Some(CollaboratorKind::Demo),
            "log" => Some(CollaboratorKind::Log),
            _ => None,
        }
    }

    pub fn build(self) -> Option<Arc<dyn AuthCollaborator>> {
        match self {
            CollaboratorKind::Demo => None,
            CollaboratorKind::Log => Some(Arc::new(LoggingCollaborator)),
        }
    }
}
