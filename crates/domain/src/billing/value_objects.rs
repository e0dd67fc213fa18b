//! Value objects for the billing domain.
//!
//! Every value object validates itself at construction and records failures
//! in an embedded notification ledger. Construction never fails: an invalid
//! object exists, carries its notifications, and reports `is_valid() == false`
//! through [`Notifiable`].

use notifications::{Contract, Notifiable, NotificationLedger};
use serde::{Deserialize, Serialize};

/// A person's name.
///
/// Valid when the first name is 3 to 40 graphemes long and the last name is
/// at least 3 graphemes long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    first_name: String,
    last_name: String,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Name {
    /// Creates a name, recording a notification for each violated rule.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let ledger = Contract::new()
            .has_min_len(
                &first_name,
                3,
                "Name.FirstName",
                "first name must be at least 3 characters",
            )
            .has_min_len(
                &last_name,
                3,
                "Name.LastName",
                "last name must be at least 3 characters",
            )
            .has_max_len(
                &first_name,
                40,
                "Name.FirstName",
                "first name must have at most 40 characters",
            )
            .into_ledger();
        Self {
            first_name,
            last_name,
            ledger,
        }
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Notifiable for Name {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

/// The kind of identity document a person can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Brazilian natural-person registry, 11 digits.
    Cpf,
    /// Brazilian legal-entity registry, 14 digits.
    Cnpj,
}

impl DocumentType {
    /// Returns the digit count a document of this type must have.
    pub fn required_len(&self) -> usize {
        match self {
            DocumentType::Cpf => 11,
            DocumentType::Cnpj => 14,
        }
    }

    /// Returns the conventional upper-case abbreviation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An identity document number together with its declared type.
///
/// Valid when the number length matches the declared type. No checksum is
/// verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    number: String,
    document_type: DocumentType,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Document {
    /// Creates a document, recording a notification when the length does not
    /// match the declared type.
    pub fn new(number: impl Into<String>, document_type: DocumentType) -> Self {
        let number = number.into();
        let ledger = Contract::new()
            .has_len(
                &number,
                document_type.required_len(),
                "Document.Number",
                "invalid document number",
            )
            .into_ledger();
        Self {
            number,
            document_type,
            ledger,
        }
    }

    /// Returns the document number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the declared document type.
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }
}

impl Notifiable for Document {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

/// An e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    address: String,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Email {
    /// Creates an e-mail address, recording a notification when the shape is
    /// not plausible.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let ledger = Contract::new()
            .is_email(&address, "Email.Address", "invalid e-mail address")
            .into_ledger();
        Self { address, ledger }
    }

    /// Returns the address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl Notifiable for Email {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

/// A postal address.
///
/// Valid when street, city and country are non-empty. The remaining fields
/// are carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    country: String,
    zip_code: String,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Address {
    /// Creates an address, recording a notification for each missing
    /// required field.
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        let street = street.into();
        let number = number.into();
        let neighborhood = neighborhood.into();
        let city = city.into();
        let state = state.into();
        let country = country.into();
        let zip_code = zip_code.into();
        let ledger = Contract::new()
            .is_not_empty(&street, "Address.Street", "street is required")
            .is_not_empty(&city, "Address.City", "city is required")
            .is_not_empty(&country, "Address.Country", "country is required")
            .into_ledger();
        Self {
            street,
            number,
            neighborhood,
            city,
            state,
            country,
            zip_code,
            ledger,
        }
    }

    /// Returns the street.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the street number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the neighborhood.
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// Returns the city.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the country.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the zip code.
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl Notifiable for Address {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a dollar value.
    ///
    /// The cents portion is calculated as dollars * 100.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents - rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.cents -= rhs.cents;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("John", "Doe");
        assert!(name.is_valid());
        assert!(name.notifications().is_empty());
    }

    #[test]
    fn test_name_first_name_too_short() {
        let name = Name::new("Jo", "Doe");
        assert!(!name.is_valid());
        assert_eq!(name.notifications().len(), 1);
        assert_eq!(name.notifications()[0].key(), "Name.FirstName");
    }

    #[test]
    fn test_name_length_boundaries() {
        assert!(Name::new("Joe", "Doe").is_valid());
        assert!(Name::new("a".repeat(40), "Doe").is_valid());
        assert!(!Name::new("a".repeat(41), "Doe").is_valid());
        assert!(!Name::new("John", "Do").is_valid());
    }

    #[test]
    fn test_name_accumulates_all_failures() {
        let name = Name::new("J", "D");
        let keys: Vec<&str> = name.notifications().iter().map(|n| n.key()).collect();
        assert_eq!(keys, vec!["Name.FirstName", "Name.LastName"]);
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("John", "Doe");
        assert_eq!(name.to_string(), "John Doe");
    }

    #[test]
    fn test_document_type_required_len() {
        assert_eq!(DocumentType::Cpf.required_len(), 11);
        assert_eq!(DocumentType::Cnpj.required_len(), 14);
        assert_eq!(DocumentType::Cpf.to_string(), "CPF");
    }

    #[test]
    fn test_document_cpf_valid_at_11_digits() {
        let document = Document::new("12345678901", DocumentType::Cpf);
        assert!(document.is_valid());
        assert_eq!(document.number(), "12345678901");
    }

    #[test]
    fn test_document_cpf_invalid_at_other_lengths() {
        assert!(!Document::new("123", DocumentType::Cpf).is_valid());
        assert!(!Document::new("123456789012", DocumentType::Cpf).is_valid());
        assert!(!Document::new("12345678901234", DocumentType::Cpf).is_valid());
    }

    #[test]
    fn test_document_cnpj_requires_14_digits() {
        assert!(Document::new("12345678901234", DocumentType::Cnpj).is_valid());
        assert!(!Document::new("12345678901", DocumentType::Cnpj).is_valid());
    }

    #[test]
    fn test_document_failure_key() {
        let document = Document::new("123", DocumentType::Cpf);
        assert_eq!(document.notifications()[0].key(), "Document.Number");
    }

    #[test]
    fn test_email_valid() {
        let email = Email::new("john.doe@example.com");
        assert!(email.is_valid());
        assert_eq!(email.address(), "john.doe@example.com");
    }

    #[test]
    fn test_email_invalid_shapes() {
        assert!(!Email::new("not-an-email").is_valid());
        assert!(!Email::new("@example.com").is_valid());
        assert!(!Email::new("john@").is_valid());
        assert!(!Email::new("").is_valid());
    }

    #[test]
    fn test_address_valid() {
        let address =
            Address::new("Main St", "42", "Downtown", "Springfield", "IL", "USA", "62704");
        assert!(address.is_valid());
        assert_eq!(address.street(), "Main St");
        assert_eq!(address.zip_code(), "62704");
    }

    #[test]
    fn test_address_requires_street_city_country() {
        let address = Address::new("", "42", "Downtown", "", "IL", "", "62704");
        let keys: Vec<&str> = address.notifications().iter().map(|n| n.key()).collect();
        assert_eq!(keys, vec!["Address.Street", "Address.City", "Address.Country"]);
    }

    #[test]
    fn test_address_whitespace_street_is_missing() {
        let address = Address::new("   ", "42", "Downtown", "Springfield", "IL", "USA", "62704");
        assert!(!address.is_valid());
    }

    #[test]
    fn test_address_optional_fields_may_be_empty() {
        let address = Address::new("Main St", "", "", "Springfield", "", "USA", "");
        assert!(address.is_valid());
    }

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn test_money_from_dollars() {
        assert_eq!(Money::from_dollars(100).cents(), 10_000);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
        c -= b;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_money_sign_predicates() {
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_money_serialization_roundtrip() {
        let money = Money::from_cents(9999);
        let json = serde_json::to_string(&money).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(money, deserialized);
    }
}
