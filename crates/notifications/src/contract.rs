use unicode_segmentation::UnicodeSegmentation;

use crate::ledger::{Notifiable, NotificationLedger};

/// Fluent rule runner that collects failures instead of returning early.
///
/// Each check records a notification when its rule is violated and returns
/// the contract for chaining, so a caller runs every rule and reads the
/// accumulated result at the end:
///
/// ```
/// use notifications::{Contract, Notifiable};
///
/// let contract = Contract::new()
///     .has_min_len("Jo", 3, "Name.FirstName", "first name must be at least 3 characters")
///     .is_email("jo@example.com", "Email.Address", "invalid e-mail address");
/// assert!(!contract.is_valid());
/// ```
///
/// String lengths are counted in grapheme clusters, not bytes.
#[derive(Debug, Default)]
pub struct Contract {
    ledger: NotificationLedger,
}

impl Contract {
    /// Creates a contract with no recorded failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `value` to be at least `min` graphemes long.
    pub fn has_min_len(
        mut self,
        value: &str,
        min: usize,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if value.graphemes(true).count() < min {
            self.ledger.add(key, message);
        }
        self
    }

    /// Requires `value` to be at most `max` graphemes long.
    pub fn has_max_len(
        mut self,
        value: &str,
        max: usize,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if value.graphemes(true).count() > max {
            self.ledger.add(key, message);
        }
        self
    }

    /// Requires `value` to be exactly `len` graphemes long.
    pub fn has_len(
        mut self,
        value: &str,
        len: usize,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if value.graphemes(true).count() != len {
            self.ledger.add(key, message);
        }
        self
    }

    /// Requires `value` to contain something other than whitespace.
    pub fn is_not_empty(
        mut self,
        value: &str,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if value.trim().is_empty() {
            self.ledger.add(key, message);
        }
        self
    }

    /// Requires `value` to have a plausible e-mail shape.
    pub fn is_email(
        mut self,
        value: &str,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if !validator::validate_email(value) {
            self.ledger.add(key, message);
        }
        self
    }

    /// Requires `condition` to hold.
    pub fn is_true(
        mut self,
        condition: bool,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        if !condition {
            self.ledger.add(key, message);
        }
        self
    }

    /// Consumes the contract, yielding the accumulated ledger.
    pub fn into_ledger(self) -> NotificationLedger {
        self.ledger
    }
}

impl Notifiable for Contract {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}
