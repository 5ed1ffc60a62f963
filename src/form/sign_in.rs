use secrecy::SecretString;
use serde::Deserialize;

use crate::form::ValidationError;
use crate::security::{AuthCollaborator, Credentials};

/// Fields posted by the sign-in form.
///
/// Missing fields deserialize as empty strings so that they surface as
/// advisories instead of a rejected request.
#[derive(Deserialize, Default)]
pub struct SignInFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Result of a single submission.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    Blocked(ValidationError),
    Delegated,
    Demo,
}

impl SignInFormData {
    #[cfg(test)]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }

        Ok(Credentials {
            email: email.to_string(),
            password: SecretString::from(self.password.clone()),
        })
    }

    /// Validates the fields and hands the credentials to `collaborator`, if any.
    ///
    /// The collaborator is called at most once, and only when both fields are filled.
    pub fn submit(&self, collaborator: Option<&dyn AuthCollaborator>) -> Submission {
        log::debug!(
            "sign-in attempt (email provided: {})",
            !self.email.trim().is_empty()
        );

        let credentials = match self.validate() {
            Ok(credentials) => credentials,
            Err(e) => return Submission::Blocked(e),
        };

        match collaborator {
            Some(collaborator) => {
                collaborator.submit(credentials);
                Submission::Delegated
            }
            None => Submission::Demo,
        }
    }
}
