//! Error types for trigger validation, mitigation analysis and email parsing.

use thiserror::Error;

/// Failure to produce a recommendation for a trigger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MitigationError {
    /// Trigger is structurally invalid and was not analyzed
    #[error("invalid trigger field '{field}': {reason}")]
    InvalidTrigger { field: &'static str, reason: String },

    /// No rule fired and the delay is not critical enough for the air-freight fallback
    #[error("no applicable mitigation for SKU '{sku}'")]
    NoApplicableMitigation { sku: String },
}

/// Failure to extract a complete trigger from email text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailParseError {
    /// One or more required fields were missing or unparseable
    #[error("email is missing required fields: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// Trigger input that does not conform to the published JSON Schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The generated schema could not be compiled
    #[error("invalid trigger schema: {0}")]
    Compile(String),

    /// Input violated the schema; one message per violation
    #[error("trigger input failed schema validation: {}", violations.join("; "))]
    Invalid { violations: Vec<String> },
}
