use serde::Serialize;

/// A single validation failure.
///
/// Pairs the logical field it refers to (e.g. `"Name.FirstName"`) with a
/// human-readable message. Notifications are plain data, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    key: String,
    message: String,
}

impl Notification {
    /// Creates a new notification.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the key identifying the field the failure refers to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An ordered collection of validation failures.
///
/// The ledger is append-only through its public surface: rules add
/// notifications, callers read them. An empty ledger means valid. Merging
/// preserves insertion order and never deduplicates, so the same failure
/// reported by two objects appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationLedger {
    notifications: Vec<Notification>,
}

impl NotificationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `key` with `message`.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.notifications.push(Notification::new(key, message));
    }

    /// Appends a prebuilt notification.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Merges all notifications from `source`, preserving their order.
    pub fn absorb(&mut self, source: &dyn Notifiable) {
        self.notifications
            .extend(source.ledger().notifications().iter().cloned());
    }

    /// Merges notifications from each source in turn.
    pub fn absorb_all<'a, I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = &'a dyn Notifiable>,
    {
        for source in sources {
            self.absorb(source);
        }
    }

    /// Returns true when no failures have been recorded.
    pub fn is_valid(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns the recorded notifications in insertion order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the number of recorded notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Returns true when the ledger holds no notifications.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

/// Capability of carrying validation failures.
///
/// Every self-validating type embeds one [`NotificationLedger`] and exposes
/// it through this trait, which is what lets a handler merge failures from
/// heterogeneous objects through a single code path.
pub trait Notifiable {
    /// Returns the object's ledger.
    fn ledger(&self) -> &NotificationLedger;

    /// Returns true when the object's ledger is empty.
    fn is_valid(&self) -> bool {
        self.ledger().is_valid()
    }

    /// Returns the object's notifications in insertion order.
    fn notifications(&self) -> &[Notification] {
        self.ledger().notifications()
    }
}

// A bare ledger merges through the same path as any domain object.
impl Notifiable for NotificationLedger {
    fn ledger(&self) -> &NotificationLedger {
        self
    }
}
