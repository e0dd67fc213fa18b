//! Student repository trait and in-memory implementation.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::DomainError;

use super::student::Student;

/// Trait for student persistence operations.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Returns true when a student with this document number already exists.
    async fn document_exists(&self, document: &str) -> Result<bool, DomainError>;

    /// Returns true when a student with this e-mail address already exists.
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Persists the student together with its subscriptions.
    async fn create_subscription(&self, student: &Student) -> Result<(), DomainError>;
}

#[derive(Debug, Default)]
struct InMemoryStudentState {
    documents: HashSet<String>,
    emails: HashSet<String>,
    students: Vec<Student>,
    fail_on_create: bool,
}

/// In-memory student repository for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    state: Arc<RwLock<InMemoryStudentState>>,
}

impl InMemoryStudentRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document number as already taken.
    pub fn register_document(&self, document: impl Into<String>) {
        self.state.write().unwrap().documents.insert(document.into());
    }

    /// Seeds an e-mail address as already taken.
    pub fn register_email(&self, email: impl Into<String>) {
        self.state.write().unwrap().emails.insert(email.into());
    }

    /// Configures the repository to fail on the next create call.
    pub fn set_fail_on_create(&self, fail: bool) {
        self.state.write().unwrap().fail_on_create = fail;
    }

    /// Returns the number of stored students.
    pub fn student_count(&self) -> usize {
        self.state.read().unwrap().students.len()
    }

    /// Returns the stored students in creation order.
    pub fn students(&self) -> Vec<Student> {
        self.state.read().unwrap().students.clone()
    }

    /// Returns true if a document number is registered.
    pub fn has_document(&self, document: &str) -> bool {
        self.state.read().unwrap().documents.contains(document)
    }

    /// Returns true if an e-mail address is registered.
    pub fn has_email(&self, email: &str) -> bool {
        self.state.read().unwrap().emails.contains(email)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn document_exists(&self, document: &str) -> Result<bool, DomainError> {
        Ok(self.state.read().unwrap().documents.contains(document))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.state.read().unwrap().emails.contains(email))
    }

    async fn create_subscription(&self, student: &Student) -> Result<(), DomainError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_create {
            return Err(DomainError::Repository("Storage unavailable".to_string()));
        }

        state.documents.insert(student.document().number().to_string());
        state.emails.insert(student.email().address().to_string());
        state.students.push(student.clone());

        Ok(())
    }
}
