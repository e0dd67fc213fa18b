//! Subscription entity.

use chrono::{DateTime, Utc};
use common::EntityId;
use notifications::{Contract, Notifiable, NotificationLedger};
use serde::Serialize;

use super::payment::Payment;

/// A student's subscription to the service.
///
/// Born active, with creation and update timestamps stamped at construction.
/// Payments are owned by the subscription and append-only through the public
/// surface.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    id: EntityId,
    create_date: DateTime<Utc>,
    last_update_date: DateTime<Utc>,
    expiration_date: Option<DateTime<Utc>>,
    active: bool,
    payments: Vec<Payment>,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Subscription {
    /// Creates an active subscription. `None` means it never expires.
    pub fn new(expiration_date: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            create_date: now,
            last_update_date: now,
            expiration_date,
            active: true,
            payments: Vec::new(),
            ledger: NotificationLedger::new(),
        }
    }

    /// Adds a payment to the subscription.
    ///
    /// The paid date must lie in the past; a violation records a
    /// notification on the subscription. The payment is appended either way.
    pub fn add_payment(&mut self, payment: Payment) {
        let check = Contract::new().is_true(
            Utc::now() > payment.paid_date(),
            "Subscription.Payments",
            "payment date must be in the past",
        );
        self.ledger.absorb(&check);
        self.payments.push(payment);
    }

    /// Activates the subscription and stamps the update time.
    pub fn activate(&mut self) {
        self.active = true;
        self.last_update_date = Utc::now();
    }

    /// Deactivates the subscription and stamps the update time.
    pub fn inactivate(&mut self) {
        self.active = false;
        self.last_update_date = Utc::now();
    }

    /// Returns the subscription's identity.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns when the subscription was created.
    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    /// Returns when the subscription last changed.
    pub fn last_update_date(&self) -> DateTime<Utc> {
        self.last_update_date
    }

    /// Returns the expiration date, if any.
    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expiration_date
    }

    /// Returns true while the subscription is active.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Returns the payments made towards this subscription.
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Returns the number of payments.
    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }
}

impl Notifiable for Subscription {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}
