//! Step declaration types.
//!
//! A Cog advertises each step to the host runtime as a [`StepDefinition`]:
//! a stable id, a human-readable name, a matching expression with named
//! capture groups, a [`StepType`] tag, and the [`FieldDefinition`] schema
//! the host uses to turn free-text or structured invocations into a step
//! input record.

use serde::{Deserialize, Serialize};

/// What kind of step this is, from the host's point of view.
///
/// Validations assert something about the system under test; actions
/// change it. The serialized form matches the wire constants of the
/// host's step-definition schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepType {
    /// A step that changes state in the system under test.
    Action,
    /// A step that asserts an expectation and passes or fails.
    Validation,
}

/// Declared type of an expected step field.
///
/// The host validates and coerces invocation values against these before
/// handing the step its input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Any scalar value (string, number, boolean).
    #[serde(rename = "ANYSCALAR")]
    AnyScalar,
    /// A plain string.
    #[serde(rename = "STRING")]
    String,
    /// A numeric value.
    #[serde(rename = "NUMERIC")]
    Numeric,
    /// An email address.
    #[serde(rename = "EMAIL")]
    Email,
}

/// Schema entry for one expected step field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Key the value is delivered under in the step input.
    pub field: String,
    /// Declared value type.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Human-readable description shown by the host.
    pub description: String,
}

impl FieldDefinition {
    /// Convenience constructor.
    pub fn new(
        field: impl Into<String>,
        kind: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            description: description.into(),
        }
    }
}

/// Complete declaration of one step, as consumed by the host's
/// discovery/manifest machinery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable identifier the host routes run requests by.
    pub step_id: String,
    /// Human-readable step name.
    pub name: String,
    /// Matching expression with named capture groups; the host applies it
    /// to free-text invocations to extract the expected fields.
    pub expression: String,
    /// Step type tag.
    #[serde(rename = "type")]
    pub step_type: StepType,
    /// Field schema for this step.
    pub expected_fields: Vec<FieldDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_type_wire_constants() {
        assert_eq!(
            serde_json::to_string(&StepType::Action).unwrap(),
            "\"ACTION\""
        );
        assert_eq!(
            serde_json::to_string(&StepType::Validation).unwrap(),
            "\"VALIDATION\""
        );
    }

    #[test]
    fn field_type_wire_constants() {
        assert_eq!(
            serde_json::to_string(&FieldType::AnyScalar).unwrap(),
            "\"ANYSCALAR\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::String).unwrap(),
            "\"STRING\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Numeric).unwrap(),
            "\"NUMERIC\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Email).unwrap(),
            "\"EMAIL\""
        );
    }

    #[test]
    fn field_type_serde_roundtrip() {
        let kinds = vec![
            FieldType::AnyScalar,
            FieldType::String,
            FieldType::Numeric,
            FieldType::Email,
        ];
        for kind in &kinds {
            let json = serde_json::to_string(kind).unwrap();
            let restored: FieldType = serde_json::from_str(&json).unwrap();
            assert_eq!(&restored, kind);
        }
    }

    #[test]
    fn field_definition_constructor() {
        let field = FieldDefinition::new("email", FieldType::Email, "The inbox's email address");
        assert_eq!(field.field, "email");
        assert_eq!(field.kind, FieldType::Email);
        assert_eq!(field.description, "The inbox's email address");
    }

    #[test]
    fn step_definition_serde_roundtrip() {
        let def = StepDefinition {
            step_id: "ExampleStep".into(),
            name: "Check something".into(),
            expression: "check (?<thing>.+)".into(),
            step_type: StepType::Validation,
            expected_fields: vec![FieldDefinition::new(
                "thing",
                FieldType::String,
                "Thing to check",
            )],
        };
        let json = serde_json::to_string(&def).unwrap();
        let restored: StepDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, def);
    }

    #[test]
    fn step_definition_uses_type_key() {
        let def = StepDefinition {
            step_id: "ExampleStep".into(),
            name: "Check something".into(),
            expression: "check (?<thing>.+)".into(),
            step_type: StepType::Validation,
            expected_fields: vec![],
        };
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["type"], "VALIDATION");
        assert_eq!(value["step_id"], "ExampleStep");
    }
}
