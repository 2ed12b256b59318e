//! JSON Schema for trigger input files.
//!
//! The schema is derived from [`DelayTrigger`] so it tracks the model. Input
//! is validated against it before deserialization, which reports every
//! violation at once instead of the first serde error.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::models::DelayTrigger;

/// Schema for a JSON array of delay triggers
pub fn trigger_list_schema() -> Value {
    let schema = schemars::schema_for!(Vec<DelayTrigger>);
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

/// Check a JSON value against the trigger list schema
pub fn validate_trigger_list(instance: &Value) -> Result<(), SchemaError> {
    let schema = trigger_list_schema();
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| SchemaError::Compile(e.to_string()))?;

    let violations: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        debug!("Trigger input has {} schema violations", violations.len());
        Err(SchemaError::Invalid { violations })
    }
}

/// Parse and validate a JSON array of triggers
pub fn parse_trigger_list(json: &str) -> Result<Vec<DelayTrigger>> {
    let value: Value = serde_json::from_str(json).context("Trigger input is not valid JSON")?;
    validate_trigger_list(&value)?;
    serde_json::from_value(value).context("Failed to deserialize triggers")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[{
        "sku": "MOTOR-204",
        "supplierName": "DriveMakers",
        "originalEta": "2024-02-18",
        "delayDays": 10,
        "reason": "Capacity issues",
        "inventoryDaysRemaining": 5,
        "otherDcStock": 300,
        "otherDcLocation": "Chicago DC"
    }]"#;

    #[test]
    fn test_schema_uses_camel_case_fields() {
        let schema = trigger_list_schema().to_string();
        assert!(schema.contains("supplierName"));
        assert!(schema.contains("inventoryDaysRemaining"));
        assert!(!schema.contains("supplier_name"));
    }

    #[test]
    fn test_parse_valid_list() {
        let triggers = parse_trigger_list(VALID).unwrap();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].other_dc_stock, Some(300));
    }

    #[test]
    fn test_negative_delay_violates_schema() {
        let value: Value = serde_json::from_str(&VALID.replace("10", "-10")).unwrap();
        assert!(matches!(
            validate_trigger_list(&value),
            Err(SchemaError::Invalid { .. })
        ));
    }

    #[test]
    fn test_reports_every_violation() {
        let value = serde_json::json!([
            { "sku": "A", "supplierName": "B", "originalEta": "2024-02-18", "reason": "r" },
            "not a trigger"
        ]);
        let Err(SchemaError::Invalid { violations }) = validate_trigger_list(&value) else {
            panic!("expected schema violations");
        };
        // Missing delayDays and inventoryDaysRemaining, plus the string element
        assert!(violations.len() >= 2, "{:?}", violations);
    }

    #[test]
    fn test_not_json() {
        assert!(parse_trigger_list("SKU: ECU-101").is_err());
    }
}
