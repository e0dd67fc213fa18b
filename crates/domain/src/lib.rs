//! Domain layer for the subscription billing system.
//!
//! This crate provides the core domain abstractions including:
//! - Self-validating value objects and entities that accumulate keyed
//!   notifications instead of failing construction
//! - Commands with transport-level validation
//! - The subscription handler, which merges notifications from every object
//!   it touches and decides the outcome once, at the end

pub mod billing;
pub mod command;
pub mod error;

pub use billing::{
    Address, CreateBoletoSubscriptionCommand, CreateCreditCardSubscriptionCommand,
    CreatePayPalSubscriptionCommand, Document, DocumentType, Email, EmailService,
    InMemoryEmailService, InMemoryStudentRepository, Money, Name, Payment, PaymentMethod,
    SentEmail, Student, StudentRepository, Subscription, SubscriptionHandler,
};
pub use command::{Command, CommandResult, Handler};
pub use error::{DomainError, Result};
