//! Email service trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::DomainError;

/// A delivered e-mail, as recorded by the in-memory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Recipient display name.
    pub to_name: String,

    /// Recipient address.
    pub to_address: String,

    /// Subject line.
    pub subject: String,

    /// Message body.
    pub body: String,
}

/// Trait for outbound e-mail delivery.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends an e-mail to a single recipient.
    async fn send(
        &self,
        to_name: &str,
        to_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError>;
}

#[derive(Debug, Default)]
struct InMemoryEmailState {
    sent: Vec<SentEmail>,
    fail_on_send: bool,
}

/// In-memory e-mail service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailService {
    state: Arc<RwLock<InMemoryEmailState>>,
}

impl InMemoryEmailService {
    /// Creates a new in-memory e-mail service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on the next send call.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_on_send = fail;
    }

    /// Returns the number of delivered e-mails.
    pub fn sent_count(&self) -> usize {
        self.state.read().unwrap().sent.len()
    }

    /// Returns the delivered e-mails in send order.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.state.read().unwrap().sent.clone()
    }
}

#[async_trait]
impl EmailService for InMemoryEmailService {
    async fn send(
        &self,
        to_name: &str,
        to_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_send {
            return Err(DomainError::EmailService("Delivery refused".to_string()));
        }

        state.sent.push(SentEmail {
            to_name: to_name.to_string(),
            to_address: to_address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_records_email() {
        let service = InMemoryEmailService::new();
        service
            .send("John Doe", "john.doe@example.com", "Welcome", "Hello!")
            .await
            .unwrap();

        assert_eq!(service.sent_count(), 1);
        let sent = service.sent();
        assert_eq!(sent[0].to_address, "john.doe@example.com");
        assert_eq!(sent[0].subject, "Welcome");
    }

    #[tokio::test]
    async fn test_fail_on_send() {
        let service = InMemoryEmailService::new();
        service.set_fail_on_send(true);

        let result = service
            .send("John Doe", "john.doe@example.com", "Welcome", "Hello!")
            .await;
        assert!(matches!(result, Err(DomainError::EmailService(_))));
        assert_eq!(service.sent_count(), 0);
    }
}
