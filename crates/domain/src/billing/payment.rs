//! Payment entity and method variants.

use chrono::{DateTime, Utc};
use common::EntityId;
use notifications::{Contract, Notifiable, NotificationLedger};
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{Address, Document, Email, Money};

/// The instrument a subscription was paid with, carrying the fields that
/// only exist for that instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    /// Bank slip.
    Boleto {
        bar_code: String,
        boleto_number: String,
    },
    /// Credit card.
    CreditCard {
        card_holder_name: String,
        card_number: String,
        last_transaction_number: String,
    },
    /// PayPal transaction.
    PayPal { transaction_code: String },
}

impl PaymentMethod {
    /// Returns a short label for the method, used in logs and metrics.
    pub fn method_name(&self) -> &'static str {
        match self {
            PaymentMethod::Boleto { .. } => "boleto",
            PaymentMethod::CreditCard { .. } => "credit_card",
            PaymentMethod::PayPal { .. } => "paypal",
        }
    }
}

/// A payment made towards a subscription.
///
/// Carries the payer's own identity (document, address, e-mail), which is
/// independent of the subscribing student's. Notifications recorded by those
/// value objects are absorbed into the payment's ledger at construction, so
/// a payer-side failure surfaces wherever the payment is aggregated.
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    id: EntityId,
    number: String,
    method: PaymentMethod,
    paid_date: DateTime<Utc>,
    expire_date: DateTime<Utc>,
    total: Money,
    total_paid: Money,
    payer: String,
    document: Document,
    address: Address,
    email: Email,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Payment {
    /// Creates a payment.
    ///
    /// Checks that `total_paid` is not negative and absorbs any failures the
    /// payer's document, address and e-mail recorded at their construction.
    /// The relation between `expire_date` and `paid_date` is not checked,
    /// nor is `total_paid` against `total`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        method: PaymentMethod,
        paid_date: DateTime<Utc>,
        expire_date: DateTime<Utc>,
        total: Money,
        total_paid: Money,
        payer: impl Into<String>,
        document: Document,
        address: Address,
        email: Email,
    ) -> Self {
        let mut ledger = Contract::new()
            .is_true(
                !total_paid.is_negative(),
                "Payment.TotalPaid",
                "total paid cannot be negative",
            )
            .into_ledger();
        ledger.absorb_all([
            &document as &dyn Notifiable,
            &address as &dyn Notifiable,
            &email as &dyn Notifiable,
        ]);

        Self {
            id: EntityId::new(),
            number: generate_payment_number(),
            method,
            paid_date,
            expire_date,
            total,
            total_paid,
            payer: payer.into(),
            document,
            address,
            email,
            ledger,
        }
    }

    /// Returns the payment's identity.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the generated payment number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the payment method.
    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    /// Returns when the payment was made.
    pub fn paid_date(&self) -> DateTime<Utc> {
        self.paid_date
    }

    /// Returns when the payment expires.
    pub fn expire_date(&self) -> DateTime<Utc> {
        self.expire_date
    }

    /// Returns the amount owed.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns the amount actually paid.
    pub fn total_paid(&self) -> Money {
        self.total_paid
    }

    /// Returns the payer's display name.
    pub fn payer(&self) -> &str {
        &self.payer
    }

    /// Returns the payer's document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the payer's billing address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the payer's e-mail.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Notifiable for Payment {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

// First 10 hex characters of a fresh UUID, uppercased.
fn generate_payment_number() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_uppercase()
}
