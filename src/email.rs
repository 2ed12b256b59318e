//! Delay trigger extraction from semi-structured email text.
//!
//! Each line is scanned for one of six `Marker:` prefixes. The first marker
//! found on a line wins, the remainder of the line is trimmed and parsed,
//! and later lines overwrite earlier ones. Malformed values never abort the
//! scan; only the final completeness check can reject the email.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::EmailParseError;
use crate::models::DelayTrigger;

/// Leading integer, tolerant of trailing text ("7 days" -> 7)
static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("invalid LEADING_INT regex"));

/// Date formats accepted after `ETA:`, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Sku,
    Supplier,
    Eta,
    Delay,
    Reason,
    Inventory,
}

/// Markers in per-line checking order
const MARKERS: &[(&str, Field)] = &[
    ("SKU:", Field::Sku),
    ("Supplier:", Field::Supplier),
    ("ETA:", Field::Eta),
    ("Delay:", Field::Delay),
    ("Reason:", Field::Reason),
    ("Inventory:", Field::Inventory),
];

/// Fields collected so far; `None` means missing or unparseable
#[derive(Debug, Default)]
struct PartialTrigger {
    sku: Option<String>,
    supplier_name: Option<String>,
    original_eta: Option<NaiveDate>,
    delay_days: Option<u32>,
    reason: Option<String>,
    inventory_days_remaining: Option<u32>,
}

impl PartialTrigger {
    fn assign(&mut self, field: Field, value: &str) {
        match field {
            Field::Sku => self.sku = non_empty(value),
            Field::Supplier => self.supplier_name = non_empty(value),
            Field::Eta => self.original_eta = parse_date(value),
            Field::Delay => self.delay_days = parse_days(value),
            Field::Reason => self.reason = non_empty(value),
            Field::Inventory => self.inventory_days_remaining = parse_days(value),
        }
    }

    fn into_trigger(self) -> Result<DelayTrigger, EmailParseError> {
        match self {
            PartialTrigger {
                sku: Some(sku),
                supplier_name: Some(supplier_name),
                original_eta: Some(original_eta),
                delay_days: Some(delay_days),
                reason: Some(reason),
                inventory_days_remaining: Some(inventory_days_remaining),
            } => Ok(DelayTrigger::new(
                sku,
                supplier_name,
                original_eta,
                delay_days,
                reason,
                inventory_days_remaining,
            )),
            partial => Err(EmailParseError::Incomplete {
                missing: partial.missing_fields(),
            }),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("sku", self.sku.is_none()),
            ("supplierName", self.supplier_name.is_none()),
            ("originalEta", self.original_eta.is_none()),
            ("delayDays", self.delay_days.is_none()),
            ("reason", self.reason.is_none()),
            ("inventoryDaysRemaining", self.inventory_days_remaining.is_none()),
        ];
        checks
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| name)
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse an integer prefix the way a lenient form field would.
///
/// Returns `None` when no digits lead the value. Negative and overflowing
/// values also yield `None`: they cannot form a valid trigger.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let captures = LEADING_INT.captures(value)?;
    captures.get(1)?.as_str().parse().ok()
}

fn parse_days(value: &str) -> Option<u32> {
    parse_leading_int(value).and_then(|n| u32::try_from(n).ok())
}

/// Parse an ETA value as a calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Extract a trigger, naming every missing or invalid required field on failure
pub fn parse_email_detailed(email_body: &str) -> Result<DelayTrigger, EmailParseError> {
    let mut partial = PartialTrigger::default();

    for line in email_body.split('\n') {
        let matched = MARKERS
            .iter()
            .find_map(|(marker, field)| line.split_once(marker).map(|(_, rest)| (*field, rest)));

        if let Some((field, rest)) = matched {
            partial.assign(field, rest.trim());
        }
    }

    let result = partial.into_trigger();
    match &result {
        Ok(trigger) => debug!(sku = %trigger.sku, "Parsed delay trigger from email"),
        Err(e) => debug!("Email parse failed: {}", e),
    }
    result
}

/// Extract a trigger, or `None` if any required field is missing or invalid
pub fn parse_email_content(email_body: &str) -> Option<DelayTrigger> {
    parse_email_detailed(email_body).ok()
}
