pub mod sign_in;

/// Field-level problems that block a sign-in submission.
///
/// These are advisories shown to the user, never propagated to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("Please enter your password.")]
    MissingPassword,
}
