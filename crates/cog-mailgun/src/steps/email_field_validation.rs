//! Email field validation step.
//!
//! Checks one field of a delivered email (`subject`, `body-html`,
//! `body-plain`, or `from`) against an expected value. The step fetches
//! the inbox listing for the target address, picks the message at the
//! requested position counting from the oldest, retrieves it by storage
//! URL, and compares the chosen field with the scenario's expectation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use cog_step::{FieldDefinition, FieldType, RunStepResult, Step, StepInput, StepType};

use crate::client::{ClientError, MailgunClient};
use crate::models::EmailField;

/// Step that validates the content of a delivered email.
pub struct EmailFieldValidationStep {
    client: Arc<dyn MailgunClient>,
}

impl EmailFieldValidationStep {
    pub fn new(client: Arc<dyn MailgunClient>) -> Self {
        Self { client }
    }

    /// Run the check; every early exit maps to an error outcome.
    async fn check(&self, input: &StepInput) -> Result<RunStepResult, CheckError> {
        let email = input
            .string("email")
            .ok_or(CheckError::MissingField("email"))?;
        let expectation = input
            .string("expectation")
            .ok_or(CheckError::MissingField("expectation"))?;
        let field_name = input.string("field").unwrap_or_default();
        let operator_name = input.string("operator").unwrap_or_default();
        // Absent, unparsable, and zero positions all fall back to 1.
        let position = input.int("position").filter(|&p| p != 0).unwrap_or(1);

        let auth_domain = self.client.domain().to_string();
        if email.split('@').nth(1) != Some(auth_domain.as_str()) {
            warn!(
                email = %email,
                auth_domain = %auth_domain,
                "refusing to check inbox outside the authenticated domain"
            );
            return Err(CheckError::DomainMismatch { email, auth_domain });
        }

        let inbox = self
            .client
            .inbox(&email)
            .await?
            .ok_or_else(|| CheckError::InboxUnavailable {
                email: email.clone(),
            })?;

        if let Some(message) = inbox.message.filter(|m| !m.is_empty()) {
            return Err(CheckError::Upstream { message });
        }

        let index = usize::try_from(position)
            .ok()
            .filter(|&p| p >= 1 && p <= inbox.items.len())
            .ok_or(CheckError::PositionOutOfRange { position })?;

        // The listing arrives newest first; positions count from the
        // oldest message, so index into the reversed listing.
        let item = inbox
            .items
            .iter()
            .rev()
            .nth(index - 1)
            .ok_or(CheckError::PositionOutOfRange { position })?;

        let message = self
            .client
            .message_by_storage_url(&item.storage.url)
            .await?
            .ok_or(CheckError::MessageUnavailable { position })?;

        let actual = EmailField::parse(&field_name).and_then(|f| message.field(f));

        if compare(Operator::parse(&operator_name), &expectation, actual) {
            debug!(email = %email, field = %field_name, "email field check passed");
            Ok(RunStepResult::pass(
                "Check on email %s passed: %s %s \"%s\"",
                vec![
                    json!(field_name),
                    json!(field_name),
                    json!(operator_name),
                    json!(expectation),
                ],
            ))
        } else {
            debug!(email = %email, field = %field_name, "email field check failed");
            let actual_arg = actual.map_or(Value::Null, |a| json!(a));
            Ok(RunStepResult::fail(
                "Check on email %s failed: %s %s \"%s\", but it was actually %s",
                vec![
                    json!(field_name),
                    json!(field_name),
                    json!(operator_name),
                    json!(expectation),
                    actual_arg,
                ],
            ))
        }
    }
}

#[async_trait]
impl Step for EmailFieldValidationStep {
    fn step_id(&self) -> &str {
        "EmailFieldValidationStep"
    }

    fn name(&self) -> &str {
        "Check the content of an email"
    }

    fn expression(&self) -> &str {
        r"the (?<field>(subject|body-html|body-plain|from)) of the (?<position>\d+)(?:(st|nd|rd|th))? mailgun email for (?<email>.+) (?<operator>(should contain|should not contain|should be)) (?<expectation>.+)"
    }

    fn step_type(&self) -> StepType {
        StepType::Validation
    }

    fn expected_fields(&self) -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("email", FieldType::Email, "The inbox's email address"),
            FieldDefinition::new(
                "position",
                FieldType::Numeric,
                "The nth message to check from the email's inbox",
            ),
            FieldDefinition::new("field", FieldType::String, "Field name to check"),
            FieldDefinition::new(
                "operator",
                FieldType::String,
                "The operator to use when performing the validation. Current supported values are: should contain, should not contain, and should be",
            ),
            FieldDefinition::new(
                "expectation",
                FieldType::AnyScalar,
                "Expected field value",
            ),
        ]
    }

    async fn execute(&self, input: StepInput) -> RunStepResult {
        match self.check(&input).await {
            Ok(result) => result,
            Err(err) => err.into_result(),
        }
    }
}

/// Everything that stops a check short of a pass/fail verdict.
#[derive(Debug, Error)]
enum CheckError {
    /// The target address is outside the authenticated domain.
    #[error("email domain doesn't match {auth_domain}")]
    DomainMismatch { email: String, auth_domain: String },

    /// Mailgun returned no inbox listing for the address.
    #[error("cannot fetch inbox for {email}")]
    InboxUnavailable { email: String },

    /// Mailgun returned an error message in place of a listing.
    #[error("{message}")]
    Upstream { message: String },

    /// The requested position is outside the inbox listing.
    #[error("no email at position {position}")]
    PositionOutOfRange { position: i64 },

    /// The message behind the storage URL is gone.
    #[error("email at position {position} is no longer stored")]
    MessageUnavailable { position: i64 },

    /// The step was invoked without a required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The Mailgun client failed outright.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CheckError {
    /// Map to the error result the host reports.
    fn into_result(self) -> RunStepResult {
        match self {
            Self::DomainMismatch { email, auth_domain } => RunStepResult::error(
                "Can't check inbox for %s: email domain doesn't match %s",
                vec![json!(email), json!(auth_domain)],
            ),
            Self::InboxUnavailable { email } => {
                RunStepResult::error("Cannot fetch inbox for: %s", vec![json!(email)])
            }
            // Surface whatever Mailgun said, verbatim.
            Self::Upstream { message } => RunStepResult::error(message, vec![]),
            Self::PositionOutOfRange { position } | Self::MessageUnavailable { position } => {
                RunStepResult::error("Cannot fetch email in position: %s", vec![json!(position)])
            }
            err @ (Self::MissingField(_) | Self::Client(_)) => RunStepResult::error(
                "There was an error retrieving email messages: %s",
                vec![json!(err.to_string())],
            ),
        }
    }
}

/// Comparison operators a scenario may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    ShouldBe,
    ShouldContain,
    ShouldNotContain,
}

impl Operator {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "should be" => Some(Self::ShouldBe),
            "should contain" => Some(Self::ShouldContain),
            "should not contain" => Some(Self::ShouldNotContain),
            _ => None,
        }
    }
}

/// Decide whether `actual` satisfies `expectation` under `operator`.
///
/// A missing `actual` never satisfies any operator, and an unrecognized
/// operator is treated as unsatisfied rather than rejected. `should be`
/// is an exact match; the containment operators compare case-insensitively.
fn compare(operator: Option<Operator>, expectation: &str, actual: Option<&str>) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    match operator {
        Some(Operator::ShouldBe) => expectation == actual,
        Some(Operator::ShouldContain) => {
            actual.to_lowercase().contains(&expectation.to_lowercase())
        }
        Some(Operator::ShouldNotContain) => {
            !actual.to_lowercase().contains(&expectation.to_lowercase())
        }
        None => false,
    }
}
