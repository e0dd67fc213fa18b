//! Domain error types.

use thiserror::Error;

/// Errors that can occur while talking to external collaborators.
///
/// Validation failures never surface here: they accumulate as notifications
/// on the objects that produced them and turn into a failed
/// [`CommandResult`](crate::CommandResult). An error from this enum means a
/// collaborator itself broke, and no result can be produced at all.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Student repository error.
    #[error("Student repository error: {0}")]
    Repository(String),

    /// Email service error.
    #[error("Email service error: {0}")]
    EmailService(String),
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, DomainError>;
