use crate::form::ValidationError;

/// Message shown at the top of the sign-in screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Invalid(ValidationError),
    SignedIn,
    ForgotPassword,
    Google,
    Facebook,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Invalid(e) => e.to_string(),
            Notice::SignedIn => "Signed in (demo).".to_string(),
            Notice::ForgotPassword => "Forgot Password clicked (demo).".to_string(),
            Notice::Google => "Continue with Google (demo).".to_string(),
            Notice::Facebook => "Continue with Facebook (demo).".to_string(),
        }
    }

    /// CSS modifier: advisories block a submission, confirmations acknowledge a click.
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::Invalid(_) => "advisory",
            _ => "confirmation",
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(e: ValidationError) -> Self {
        Notice::Invalid(e)
    }
}
