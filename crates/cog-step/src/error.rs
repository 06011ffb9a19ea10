//! Step contract error types.
//!
//! Defines [`StepError`], the error type for contract-level operations
//! such as manifest validation. Step execution itself never returns an
//! error: failures surface as [`RunStepResult`](crate::RunStepResult)
//! outcomes instead.

use thiserror::Error;

/// Errors produced by step contract operations.
#[derive(Debug, Error)]
pub enum StepError {
    /// Manifest failed validation (missing name, bad version, etc.).
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
