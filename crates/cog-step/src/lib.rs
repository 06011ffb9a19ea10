//! Step contract types for Cog automation plugins.
//!
//! A Cog is a plugin that teaches the host runtime new scenario steps:
//! each step declares a regular expression with named capture groups, a
//! schema for the fields those groups bind, and an async `execute` that
//! turns the captured fields into a pass/fail/error verdict. This crate
//! defines that contract so individual Cogs only have to implement
//! [`Step`] and assemble a [`CogManifest`].
//!
//! # Type Overview
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Step`] | Trait each plugin step implements |
//! | [`StepDefinition`] | Declaration record the host registers |
//! | [`FieldDefinition`] | Schema entry for one expected field |
//! | [`StepInput`] | Field data captured from scenario text |
//! | [`RunStepResult`] | Verdict with a printf-style message |
//! | [`CogManifest`] | Plugin metadata and step registry |

pub mod definition;
pub mod error;
pub mod input;
pub mod manifest;
pub mod result;
pub mod step;

// Re-export core types at crate root for convenience.
pub use definition::{FieldDefinition, FieldType, StepDefinition, StepType};
pub use error::StepError;
pub use input::StepInput;
pub use manifest::CogManifest;
pub use result::{Outcome, RunStepResult};
pub use step::Step;
