//! Subscription billing bounded context.

mod commands;
mod email;
mod handler;
mod payment;
mod repository;
mod student;
mod subscription;
mod value_objects;

pub use commands::{
    CreateBoletoSubscriptionCommand, CreateCreditCardSubscriptionCommand,
    CreatePayPalSubscriptionCommand,
};
pub use email::{EmailService, InMemoryEmailService, SentEmail};
pub use handler::SubscriptionHandler;
pub use payment::{Payment, PaymentMethod};
pub use repository::{InMemoryStudentRepository, StudentRepository};
pub use student::Student;
pub use subscription::Subscription;
pub use value_objects::{Address, Document, DocumentType, Email, Money, Name};
