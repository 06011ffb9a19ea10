//! Scenario steps exposed by the Mailgun Cog.

pub mod email_field_validation;

pub use email_field_validation::EmailFieldValidationStep;
