//! Cog manifest types.
//!
//! Defines [`CogManifest`] -- the metadata record a plugin registers with
//! the host runtime so scenarios can discover its steps and the host
//! knows which authentication fields to collect.

use serde::{Deserialize, Serialize};

use crate::definition::{FieldDefinition, StepDefinition};
use crate::StepError;

/// Plugin metadata registered with the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CogManifest {
    /// Unique machine name (org-scoped, e.g. `"automatoninc/mailgun"`).
    pub name: String,

    /// Human-readable label shown in scenario tooling.
    pub label: String,

    /// Semantic version string (must be valid semver).
    pub version: String,

    /// Authentication fields the host collects before running any step.
    #[serde(default)]
    pub auth_fields: Vec<FieldDefinition>,

    /// Declarations for every step this plugin exposes.
    #[serde(default)]
    pub step_definitions: Vec<StepDefinition>,
}

impl CogManifest {
    /// Validate the manifest. Returns an error describing the first
    /// validation failure, or `Ok(())` if the manifest is valid.
    pub fn validate(&self) -> Result<(), StepError> {
        if self.name.is_empty() {
            return Err(StepError::InvalidManifest("name is required".into()));
        }
        if self.label.is_empty() {
            return Err(StepError::InvalidManifest("label is required".into()));
        }
        if semver::Version::parse(&self.version).is_err() {
            return Err(StepError::InvalidManifest(format!(
                "invalid semver version '{}'",
                self.version
            )));
        }
        if self.step_definitions.is_empty() {
            return Err(StepError::InvalidManifest(
                "at least one step definition is required".into(),
            ));
        }
        for definition in &self.step_definitions {
            if definition.step_id.is_empty() {
                return Err(StepError::InvalidManifest(format!(
                    "step '{}' is missing a step_id",
                    definition.name
                )));
            }
            if definition.expression.is_empty() {
                return Err(StepError::InvalidManifest(format!(
                    "step '{}' is missing an expression",
                    definition.step_id
                )));
            }
        }
        Ok(())
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StepError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }
}
