//! Mailgun Cog: scenario steps for validating delivered email.
//!
//! A Cog teaches the host automation runtime new scenario steps. This
//! one reads stored mail out of a Mailgun account so scenarios can
//! assert on what was actually delivered: fetch the inbox listing for an
//! address, pick a message by position, and check one of its fields
//! against an expectation.
//!
//! The host collects the auth record declared in
//! [`MailgunConfig::auth_fields`], builds an [`HttpMailgunClient`] from
//! it, and wires the client into [`all_steps`]. Tests substitute any
//! [`MailgunClient`] implementation instead.

pub mod client;
pub mod config;
pub mod models;
pub mod secret;
pub mod steps;

use std::sync::Arc;

use cog_step::{CogManifest, Step};

use steps::EmailFieldValidationStep;

pub use client::{ClientError, HttpMailgunClient, MailgunClient};
pub use config::MailgunConfig;
pub use secret::ApiKey;

/// Machine name the host registry keys this Cog by.
pub const COG_NAME: &str = "automatoninc/mailgun";

/// Human-readable label shown in scenario tooling.
pub const COG_LABEL: &str = "Mailgun";

/// Create every step this Cog exposes, wired to the given client.
pub fn all_steps(client: Arc<dyn MailgunClient>) -> Vec<Box<dyn Step>> {
    vec![Box::new(EmailFieldValidationStep::new(client))]
}

/// Assemble the manifest the host registers for this Cog.
///
/// Step declarations are static, so the manifest is built against an
/// unauthenticated client.
pub fn manifest() -> CogManifest {
    let client: Arc<dyn MailgunClient> =
        Arc::new(HttpMailgunClient::new(MailgunConfig::default()));
    CogManifest {
        name: COG_NAME.into(),
        label: COG_LABEL.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        auth_fields: MailgunConfig::auth_fields(),
        step_definitions: all_steps(client)
            .iter()
            .map(|step| step.definition())
            .collect(),
    }
}
