//! Command handling infrastructure.

use async_trait::async_trait;
use notifications::NotificationLedger;
use serde::Serialize;

use crate::error::DomainError;

/// Trait for commands that validate their own transport-level rules.
///
/// A command checks only what can be checked without building the domain
/// graph (required fields, lengths) and returns the failures it found. An
/// empty ledger does not guarantee the command will succeed: value objects
/// and entities apply their own rules during handling.
pub trait Command: Send + Sync {
    /// Runs the command's rules, returning the accumulated failures.
    fn validate(&self) -> NotificationLedger;
}

/// Trait for handlers that execute a command end to end.
///
/// Implemented once per command type a handler accepts.
#[async_trait]
pub trait Handler<C: Command> {
    /// Handles the command and reports the outcome.
    ///
    /// `Err` is reserved for collaborator failures. A rejected command is
    /// still a handled command: it comes back as `Ok` with a result whose
    /// `succeeded()` is false.
    async fn handle(&mut self, command: C) -> Result<CommandResult, DomainError>;
}

/// Outcome of command handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    success: bool,
    message: String,
}

impl CommandResult {
    /// Creates a successful result.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Creates a failed result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Returns true when the command succeeded.
    pub fn succeeded(&self) -> bool {
        self.success
    }

    /// Returns the result message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
