use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MitigationError;

// ============================================================================
// Delay Trigger
// ============================================================================

/// A supplier that can ship the same SKU instead of the delayed one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlternateSupplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Lead time in days
    pub lead_time: u32,
    /// On-time delivery percentage (0-100)
    pub reliability: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AlternateSupplier {
    pub fn new(name: impl Into<String>, lead_time: u32, reliability: u8) -> Self {
        Self {
            id: None,
            name: name.into(),
            lead_time,
            reliability,
            location: None,
        }
    }
}

/// An observed delivery delay for one SKU at one supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelayTrigger {
    pub sku: String,
    pub supplier_name: String,
    /// Date the shipment was originally due
    pub original_eta: NaiveDate,
    /// Days beyond the original ETA
    pub delay_days: u32,
    pub reason: String,
    /// Days of on-hand stock before stockout
    pub inventory_days_remaining: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_suppliers: Vec<AlternateSupplier>,
    /// Units available at a secondary distribution center
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_dc_stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_dc_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand_location: Option<String>,
    /// True if the delay affects a production schedule
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub production_impact: bool,
}

impl DelayTrigger {
    /// Create a trigger with the required fields; optional context starts empty.
    pub fn new(
        sku: impl Into<String>,
        supplier_name: impl Into<String>,
        original_eta: NaiveDate,
        delay_days: u32,
        reason: impl Into<String>,
        inventory_days_remaining: u32,
    ) -> Self {
        Self {
            sku: sku.into(),
            supplier_name: supplier_name.into(),
            original_eta,
            delay_days,
            reason: reason.into(),
            inventory_days_remaining,
            alternate_suppliers: Vec::new(),
            other_dc_stock: None,
            other_dc_location: None,
            demand_location: None,
            production_impact: false,
        }
    }

    pub fn with_alternate(mut self, supplier: AlternateSupplier) -> Self {
        self.alternate_suppliers.push(supplier);
        self
    }

    pub fn with_other_dc(mut self, stock: u32, location: impl Into<String>) -> Self {
        self.other_dc_stock = Some(stock);
        self.other_dc_location = Some(location.into());
        self
    }

    pub fn with_demand_location(mut self, location: impl Into<String>) -> Self {
        self.demand_location = Some(location.into());
        self
    }

    pub fn with_production_impact(mut self, impact: bool) -> Self {
        self.production_impact = impact;
        self
    }

    /// Stock at the secondary DC, treating zero as absent
    pub fn available_dc_stock(&self) -> Option<u32> {
        self.other_dc_stock.filter(|&units| units > 0)
    }

    /// Delay runs past the remaining inventory
    pub fn is_critical(&self) -> bool {
        self.delay_days > self.inventory_days_remaining
    }

    /// Reject structurally invalid triggers before any rule runs
    pub fn validate(&self) -> Result<(), MitigationError> {
        let required = [
            ("sku", &self.sku),
            ("supplierName", &self.supplier_name),
            ("reason", &self.reason),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MitigationError::InvalidTrigger {
                    field,
                    reason: "must be non-empty".to_string(),
                });
            }
        }

        for supplier in &self.alternate_suppliers {
            if supplier.name.trim().is_empty() {
                return Err(MitigationError::InvalidTrigger {
                    field: "alternateSuppliers",
                    reason: "supplier name must be non-empty".to_string(),
                });
            }
            if supplier.reliability > 100 {
                return Err(MitigationError::InvalidTrigger {
                    field: "alternateSuppliers",
                    reason: format!(
                        "reliability of '{}' is {}%, expected 0-100",
                        supplier.name, supplier.reliability
                    ),
                });
            }
        }

        Ok(())
    }
}
