//! Subscription command handler.

use async_trait::async_trait;
use chrono::{DateTime, Months, Utc};
use notifications::{Notifiable, NotificationLedger};

use crate::command::{Command, CommandResult, Handler};
use crate::error::DomainError;

use super::commands::{
    CreateBoletoSubscriptionCommand, CreateCreditCardSubscriptionCommand,
    CreatePayPalSubscriptionCommand,
};
use super::email::EmailService;
use super::payment::{Payment, PaymentMethod};
use super::repository::StudentRepository;
use super::student::Student;
use super::subscription::Subscription;
use super::value_objects::{Address, Document, DocumentType, Email, Money, Name};

/// Variant-agnostic view of a subscription command.
struct SubscriptionRequest {
    first_name: String,
    last_name: String,
    document: String,
    email: String,
    method: PaymentMethod,
    paid_date: DateTime<Utc>,
    expire_date: DateTime<Utc>,
    total: Money,
    total_paid: Money,
    payer: String,
    payer_document: String,
    payer_document_type: DocumentType,
    payer_email: String,
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    country: String,
    zip_code: String,
}

impl From<CreateBoletoSubscriptionCommand> for SubscriptionRequest {
    fn from(command: CreateBoletoSubscriptionCommand) -> Self {
        Self {
            first_name: command.first_name,
            last_name: command.last_name,
            document: command.document,
            email: command.email,
            method: PaymentMethod::Boleto {
                bar_code: command.bar_code,
                boleto_number: command.boleto_number,
            },
            paid_date: command.paid_date,
            expire_date: command.expire_date,
            total: command.total,
            total_paid: command.total_paid,
            payer: command.payer,
            payer_document: command.payer_document,
            payer_document_type: command.payer_document_type,
            payer_email: command.payer_email,
            street: command.street,
            number: command.number,
            neighborhood: command.neighborhood,
            city: command.city,
            state: command.state,
            country: command.country,
            zip_code: command.zip_code,
        }
    }
}

impl From<CreateCreditCardSubscriptionCommand> for SubscriptionRequest {
    fn from(command: CreateCreditCardSubscriptionCommand) -> Self {
        Self {
            first_name: command.first_name,
            last_name: command.last_name,
            document: command.document,
            email: command.email,
            method: PaymentMethod::CreditCard {
                card_holder_name: command.card_holder_name,
                card_number: command.card_number,
                last_transaction_number: command.last_transaction_number,
            },
            paid_date: command.paid_date,
            expire_date: command.expire_date,
            total: command.total,
            total_paid: command.total_paid,
            payer: command.payer,
            payer_document: command.payer_document,
            payer_document_type: command.payer_document_type,
            payer_email: command.payer_email,
            street: command.street,
            number: command.number,
            neighborhood: command.neighborhood,
            city: command.city,
            state: command.state,
            country: command.country,
            zip_code: command.zip_code,
        }
    }
}

impl From<CreatePayPalSubscriptionCommand> for SubscriptionRequest {
    fn from(command: CreatePayPalSubscriptionCommand) -> Self {
        Self {
            first_name: command.first_name,
            last_name: command.last_name,
            document: command.document,
            email: command.email,
            method: PaymentMethod::PayPal {
                transaction_code: command.transaction_code,
            },
            paid_date: command.paid_date,
            expire_date: command.expire_date,
            total: command.total,
            total_paid: command.total_paid,
            payer: command.payer,
            payer_document: command.payer_document,
            payer_document_type: command.payer_document_type,
            payer_email: command.payer_email,
            street: command.street,
            number: command.number,
            neighborhood: command.neighborhood,
            city: command.city,
            state: command.state,
            country: command.country,
            zip_code: command.zip_code,
        }
    }
}

/// Handles subscription creation commands.
///
/// The handler builds the whole domain graph for a command, merging the
/// notifications of every object it touches into its own ledger, and decides
/// the outcome once at the end: validation failures never abort the pipeline
/// (the command's own `validate` is the single fail-fast point), and only an
/// empty merged ledger lets the subscription persist. After `handle` returns
/// the ledger remains readable through [`Notifiable`] for callers that want
/// the per-field failures behind a rejection.
pub struct SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    repository: R,
    email_service: E,
    ledger: NotificationLedger,
}

impl<R, E> SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    /// Creates a new handler over the given collaborators.
    pub fn new(repository: R, email_service: E) -> Self {
        Self {
            repository,
            email_service,
            ledger: NotificationLedger::new(),
        }
    }

    /// Shared pipeline behind every command variant.
    ///
    /// `validation` is the result of the command's own `validate`; the
    /// request carries the variant-specific fields already folded into a
    /// [`PaymentMethod`].
    #[tracing::instrument(
        skip(self, validation, request),
        fields(method = request.method.method_name())
    )]
    async fn create_subscription(
        &mut self,
        validation: NotificationLedger,
        request: SubscriptionRequest,
    ) -> Result<CommandResult, DomainError> {
        metrics::counter!("subscription_commands_total").increment(1);
        let start = std::time::Instant::now();
        self.ledger = NotificationLedger::new();

        // 1. Fail fast on transport-level validation
        if !validation.is_valid() {
            self.ledger.absorb(&validation);
            metrics::counter!("subscriptions_rejected").increment(1);
            tracing::warn!(
                notifications = self.ledger.len(),
                "command validation failed"
            );
            return Ok(CommandResult::failure("could not complete subscription"));
        }

        // 2. Uniqueness checks on the raw command fields. Conflicts are
        // recorded, not returned: the rest of the graph is still built.
        if self.repository.document_exists(&request.document).await? {
            self.ledger.add("Document", "this CPF is already in use");
        }
        if self.repository.email_exists(&request.email).await? {
            self.ledger.add("Email", "this e-mail is already in use");
        }

        // 3. Student-side value objects
        let name = Name::new(request.first_name, request.last_name);
        let document = Document::new(request.document, DocumentType::Cpf);
        let email = Email::new(request.email);
        let address = Address::new(
            request.street,
            request.number,
            request.neighborhood,
            request.city,
            request.state,
            request.country,
            request.zip_code,
        );

        // 4. Entities; the subscription expires in one month
        let mut student = Student::new(name.clone(), document.clone(), email.clone());
        let mut subscription = Subscription::new(Utc::now().checked_add_months(Months::new(1)));

        // 5. Payment with the payer's own identity
        let payer_document = Document::new(request.payer_document, request.payer_document_type);
        let payer_email = Email::new(request.payer_email);
        let payment = Payment::new(
            request.method,
            request.paid_date,
            request.expire_date,
            request.total,
            request.total_paid,
            request.payer,
            payer_document,
            address.clone(),
            payer_email,
        );

        // 6. Relationships
        subscription.add_payment(payment.clone());
        student.add_subscription(subscription.clone());

        // 7. Merge every ledger, duplicates included
        self.ledger.absorb_all([
            &name as &dyn Notifiable,
            &document as &dyn Notifiable,
            &email as &dyn Notifiable,
            &address as &dyn Notifiable,
            &student as &dyn Notifiable,
            &subscription as &dyn Notifiable,
            &payment as &dyn Notifiable,
        ]);

        // 8. Decide once
        if !self.ledger.is_valid() {
            metrics::counter!("subscriptions_rejected").increment(1);
            tracing::warn!(notifications = self.ledger.len(), "subscription rejected");
            return Ok(CommandResult::failure("could not complete subscription"));
        }

        // 9. Persist, then welcome the student
        self.repository.create_subscription(&student).await?;

        if let Err(error) = self
            .email_service
            .send(
                &student.name().to_string(),
                student.email().address(),
                "Welcome",
                "Your subscription has been created!",
            )
            .await
        {
            tracing::warn!(%error, "welcome e-mail failed");
        }

        let duration = start.elapsed().as_secs_f64();
        metrics::histogram!("subscription_duration_seconds").record(duration);
        metrics::counter!("subscriptions_created").increment(1);
        tracing::info!(student_id = %student.id(), duration, "subscription created");

        Ok(CommandResult::success("subscription completed successfully"))
    }
}

impl<R, E> Notifiable for SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}

#[async_trait]
impl<R, E> Handler<CreateBoletoSubscriptionCommand> for SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    async fn handle(
        &mut self,
        command: CreateBoletoSubscriptionCommand,
    ) -> Result<CommandResult, DomainError> {
        let validation = command.validate();
        self.create_subscription(validation, command.into()).await
    }
}

#[async_trait]
impl<R, E> Handler<CreateCreditCardSubscriptionCommand> for SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    async fn handle(
        &mut self,
        command: CreateCreditCardSubscriptionCommand,
    ) -> Result<CommandResult, DomainError> {
        let validation = command.validate();
        self.create_subscription(validation, command.into()).await
    }
}

#[async_trait]
impl<R, E> Handler<CreatePayPalSubscriptionCommand> for SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    async fn handle(
        &mut self,
        command: CreatePayPalSubscriptionCommand,
    ) -> Result<CommandResult, DomainError> {
        let validation = command.validate();
        self.create_subscription(validation, command.into()).await
    }
}
