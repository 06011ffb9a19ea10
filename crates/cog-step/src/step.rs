//! The `Step` trait implemented by every plugin step.

use async_trait::async_trait;

use crate::definition::{FieldDefinition, StepDefinition, StepType};
use crate::input::StepInput;
use crate::result::RunStepResult;

/// A single step a Cog plugin exposes to the host runtime.
///
/// Implementations declare their identity and expected fields through the
/// accessor methods; the host matches scenario text against
/// [`expression`](Step::expression) and calls
/// [`execute`](Step::execute) with the captured fields.
///
/// `execute` is total: every failure mode maps to a
/// [`RunStepResult`] outcome rather than a transport error, so the host
/// never has to distinguish "step failed" from "step crashed".
#[async_trait]
pub trait Step: Send + Sync {
    /// Stable identifier the host uses to address this step.
    fn step_id(&self) -> &str;

    /// Human-readable step name shown in scenario output.
    fn name(&self) -> &str;

    /// Regular expression with named capture groups that binds scenario
    /// text to this step's expected fields.
    fn expression(&self) -> &str;

    /// Whether this step performs an action or a validation.
    fn step_type(&self) -> StepType;

    /// Schema of the fields this step reads from its input.
    fn expected_fields(&self) -> Vec<FieldDefinition>;

    /// Assemble the full declaration record for the host's step registry.
    fn definition(&self) -> StepDefinition {
        StepDefinition {
            step_id: self.step_id().to_string(),
            name: self.name().to_string(),
            expression: self.expression().to_string(),
            step_type: self.step_type(),
            expected_fields: self.expected_fields(),
        }
    }

    /// Run the step against the supplied field data.
    async fn execute(&self, input: StepInput) -> RunStepResult;
}
