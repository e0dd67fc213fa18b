//! Student entity.

use common::EntityId;
use notifications::{Notifiable, NotificationLedger};
use serde::Serialize;

use super::subscription::Subscription;
use super::value_objects::{Document, Email, Name};

/// A customer enrolled in the service.
///
/// Construction absorbs whatever failures the name, document and e-mail
/// recorded when they were built, so an invalid value object makes the
/// student invalid without preventing it from existing.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    id: EntityId,
    name: Name,
    document: Document,
    email: Email,
    subscriptions: Vec<Subscription>,
    #[serde(skip)]
    ledger: NotificationLedger,
}

impl Student {
    /// Creates a student from its value objects.
    pub fn new(name: Name, document: Document, email: Email) -> Self {
        let mut ledger = NotificationLedger::new();
        ledger.absorb_all([
            &name as &dyn Notifiable,
            &document as &dyn Notifiable,
            &email as &dyn Notifiable,
        ]);
        Self {
            id: EntityId::new(),
            name,
            document,
            email,
            subscriptions: Vec::new(),
            ledger,
        }
    }

    /// Adds a subscription. No cap or overlap rule is applied.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Returns the student's identity.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the student's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the student's document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the student's e-mail.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the student's subscriptions.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Returns the number of subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Notifiable for Student {
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::value_objects::DocumentType;

    fn valid_parts() -> (Name, Document, Email) {
        (
            Name::new("John", "Doe"),
            Document::new("12345678901", DocumentType::Cpf),
            Email::new("john.doe@example.com"),
        )
    }

    #[test]
    fn test_student_valid_with_valid_parts() {
        let (name, document, email) = valid_parts();
        let student = Student::new(name, document, email);
        assert!(student.is_valid());
        assert_eq!(student.subscription_count(), 0);
    }

    #[test]
    fn test_student_absorbs_value_object_failures_in_order() {
        let student = Student::new(
            Name::new("Jo", "Doe"),
            Document::new("123", DocumentType::Cpf),
            Email::new("broken"),
        );
        assert!(!student.is_valid());
        let keys: Vec<&str> = student.notifications().iter().map(|n| n.key()).collect();
        assert_eq!(keys, vec!["Name.FirstName", "Document.Number", "Email.Address"]);
    }

    #[test]
    fn test_invalid_student_still_exists_with_its_data() {
        let student = Student::new(
            Name::new("Jo", "Doe"),
            Document::new("123", DocumentType::Cpf),
            Email::new("jo@example.com"),
        );
        assert_eq!(student.name().first_name(), "Jo");
        assert_eq!(student.document().number(), "123");
    }

    #[test]
    fn test_add_subscription_appends() {
        let (name, document, email) = valid_parts();
        let mut student = Student::new(name, document, email);
        student.add_subscription(Subscription::new(None));
        student.add_subscription(Subscription::new(None));
        assert_eq!(student.subscription_count(), 2);
    }

    #[test]
    fn test_students_have_distinct_identities() {
        let (name, document, email) = valid_parts();
        let a = Student::new(name.clone(), document.clone(), email.clone());
        let b = Student::new(name, document, email);
        assert_ne!(a.id(), b.id());
    }
}
