//! Subscription commands.
//!
//! Commands are flat transport bags: every field arrives as a raw primitive
//! and is only turned into value objects during handling. Their `validate`
//! covers the transport-level name rules; everything else is checked by the
//! objects built from them.

use chrono::{DateTime, Utc};
use notifications::{Contract, NotificationLedger};

use crate::command::Command;

use super::value_objects::{DocumentType, Money};

fn validate_names(first_name: &str, last_name: &str) -> NotificationLedger {
    Contract::new()
        .has_min_len(
            first_name,
            3,
            "Name.FirstName",
            "first name must be at least 3 characters",
        )
        .has_min_len(
            last_name,
            3,
            "Name.LastName",
            "last name must be at least 3 characters",
        )
        .has_max_len(
            first_name,
            40,
            "Name.FirstName",
            "first name must have at most 40 characters",
        )
        .into_ledger()
}

/// Command to enroll a student with a subscription paid by boleto.
#[derive(Debug, Clone)]
pub struct CreateBoletoSubscriptionCommand {
    /// Student's first name.
    pub first_name: String,

    /// Student's last name.
    pub last_name: String,

    /// Student's document number (CPF).
    pub document: String,

    /// Student's e-mail address.
    pub email: String,

    /// Bar code printed on the boleto.
    pub bar_code: String,

    /// Boleto reference number.
    pub boleto_number: String,

    /// When the payment was made.
    pub paid_date: DateTime<Utc>,

    /// When the payment expires.
    pub expire_date: DateTime<Utc>,

    /// Amount owed.
    pub total: Money,

    /// Amount paid.
    pub total_paid: Money,

    /// Payer's display name.
    pub payer: String,

    /// Payer's document number.
    pub payer_document: String,

    /// Declared type of the payer's document.
    pub payer_document_type: DocumentType,

    /// Payer's e-mail address.
    pub payer_email: String,

    /// Billing address street.
    pub street: String,

    /// Billing address street number.
    pub number: String,

    /// Billing address neighborhood.
    pub neighborhood: String,

    /// Billing address city.
    pub city: String,

    /// Billing address state.
    pub state: String,

    /// Billing address country.
    pub country: String,

    /// Billing address zip code.
    pub zip_code: String,
}

impl Command for CreateBoletoSubscriptionCommand {
    fn validate(&self) -> NotificationLedger {
        validate_names(&self.first_name, &self.last_name)
    }
}

/// Command to enroll a student with a subscription paid by credit card.
#[derive(Debug, Clone)]
pub struct CreateCreditCardSubscriptionCommand {
    /// Student's first name.
    pub first_name: String,

    /// Student's last name.
    pub last_name: String,

    /// Student's document number (CPF).
    pub document: String,

    /// Student's e-mail address.
    pub email: String,

    /// Name embossed on the card.
    pub card_holder_name: String,

    /// Card number.
    pub card_number: String,

    /// Identifier of the gateway transaction.
    pub last_transaction_number: String,

    /// When the payment was made.
    pub paid_date: DateTime<Utc>,

    /// When the payment expires.
    pub expire_date: DateTime<Utc>,

    /// Amount owed.
    pub total: Money,

    /// Amount paid.
    pub total_paid: Money,

    /// Payer's display name.
    pub payer: String,

    /// Payer's document number.
    pub payer_document: String,

    /// Declared type of the payer's document.
    pub payer_document_type: DocumentType,

    /// Payer's e-mail address.
    pub payer_email: String,

    /// Billing address street.
    pub street: String,

    /// Billing address street number.
    pub number: String,

    /// Billing address neighborhood.
    pub neighborhood: String,

    /// Billing address city.
    pub city: String,

    /// Billing address state.
    pub state: String,

    /// Billing address country.
    pub country: String,

    /// Billing address zip code.
    pub zip_code: String,
}

impl Command for CreateCreditCardSubscriptionCommand {
    fn validate(&self) -> NotificationLedger {
        validate_names(&self.first_name, &self.last_name)
    }
}

/// Command to enroll a student with a subscription paid through PayPal.
#[derive(Debug, Clone)]
pub struct CreatePayPalSubscriptionCommand {
    /// Student's first name.
    pub first_name: String,

    /// Student's last name.
    pub last_name: String,

    /// Student's document number (CPF).
    pub document: String,

    /// Student's e-mail address.
    pub email: String,

    /// PayPal transaction code.
    pub transaction_code: String,

    /// When the payment was made.
    pub paid_date: DateTime<Utc>,

    /// When the payment expires.
    pub expire_date: DateTime<Utc>,

    /// Amount owed.
    pub total: Money,

    /// Amount paid.
    pub total_paid: Money,

    /// Payer's display name.
    pub payer: String,

    /// Payer's document number.
    pub payer_document: String,

    /// Declared type of the payer's document.
    pub payer_document_type: DocumentType,

    /// Payer's e-mail address.
    pub payer_email: String,

    /// Billing address street.
    pub street: String,

    /// Billing address street number.
    pub number: String,

    /// Billing address neighborhood.
    pub neighborhood: String,

    /// Billing address city.
    pub city: String,

    /// Billing address state.
    pub state: String,

    /// Billing address country.
    pub country: String,

    /// Billing address zip code.
    pub zip_code: String,
}

impl Command for CreatePayPalSubscriptionCommand {
    fn validate(&self) -> NotificationLedger {
        validate_names(&self.first_name, &self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn boleto_command() -> CreateBoletoSubscriptionCommand {
        CreateBoletoSubscriptionCommand {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            document: "12345678901".to_string(),
            email: "john.doe@example.com".to_string(),
            bar_code: "12345678".to_string(),
            boleto_number: "87654321".to_string(),
            paid_date: Utc::now() - Duration::days(1),
            expire_date: Utc::now() + Duration::days(30),
            total: Money::from_dollars(100),
            total_paid: Money::from_dollars(100),
            payer: "John Doe".to_string(),
            payer_document: "98765432109".to_string(),
            payer_document_type: DocumentType::Cpf,
            payer_email: "payer@example.com".to_string(),
            street: "Main St".to_string(),
            number: "42".to_string(),
            neighborhood: "Downtown".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
            zip_code: "62704".to_string(),
        }
    }

    #[test]
    fn test_boleto_command_with_valid_names_passes() {
        assert!(boleto_command().validate().is_valid());
    }

    #[test]
    fn test_boleto_command_rejects_short_first_name() {
        let mut command = boleto_command();
        command.first_name = "Jo".to_string();
        let ledger = command.validate();
        assert!(!ledger.is_valid());
        assert_eq!(ledger.notifications()[0].key(), "Name.FirstName");
    }

    #[test]
    fn test_boleto_command_rejects_long_first_name() {
        let mut command = boleto_command();
        command.first_name = "a".repeat(41);
        assert!(!command.validate().is_valid());
    }

    #[test]
    fn test_boleto_command_rejects_short_last_name() {
        let mut command = boleto_command();
        command.last_name = "D".to_string();
        let ledger = command.validate();
        assert_eq!(ledger.notifications()[0].key(), "Name.LastName");
    }

    #[test]
    fn test_command_validation_is_transport_level_only() {
        // A bad document number passes command validation; the Document
        // value object catches it during handling.
        let mut command = boleto_command();
        command.document = "123".to_string();
        assert!(command.validate().is_valid());
    }

    #[test]
    fn test_credit_card_command_validates_names() {
        let command = CreateCreditCardSubscriptionCommand {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            document: "12345678901".to_string(),
            email: "john.doe@example.com".to_string(),
            card_holder_name: "John Doe".to_string(),
            card_number: "4111111111111111".to_string(),
            last_transaction_number: "TX-1001".to_string(),
            paid_date: Utc::now() - Duration::days(1),
            expire_date: Utc::now() + Duration::days(30),
            total: Money::from_dollars(100),
            total_paid: Money::from_dollars(100),
            payer: "John Doe".to_string(),
            payer_document: "98765432109".to_string(),
            payer_document_type: DocumentType::Cpf,
            payer_email: "payer@example.com".to_string(),
            street: "Main St".to_string(),
            number: "42".to_string(),
            neighborhood: "Downtown".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
            zip_code: "62704".to_string(),
        };
        let ledger = command.validate();
        assert!(!ledger.is_valid());
        assert_eq!(ledger.notifications()[0].key(), "Name.FirstName");
    }

    #[test]
    fn test_paypal_command_validates_names() {
        let command = CreatePayPalSubscriptionCommand {
            first_name: "John".to_string(),
            last_name: "Do".to_string(),
            document: "12345678901".to_string(),
            email: "john.doe@example.com".to_string(),
            transaction_code: "PP-1001".to_string(),
            paid_date: Utc::now() - Duration::days(1),
            expire_date: Utc::now() + Duration::days(30),
            total: Money::from_dollars(100),
            total_paid: Money::from_dollars(100),
            payer: "John Doe".to_string(),
            payer_document: "98765432109".to_string(),
            payer_document_type: DocumentType::Cpf,
            payer_email: "payer@example.com".to_string(),
            street: "Main St".to_string(),
            number: "42".to_string(),
            neighborhood: "Downtown".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
            zip_code: "62704".to_string(),
        };
        let ledger = command.validate();
        assert!(!ledger.is_valid());
        assert_eq!(ledger.notifications()[0].key(), "Name.LastName");
    }
}
