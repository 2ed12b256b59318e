use serde::{Deserialize, Serialize};

// ============================================================================
// Mitigation Types
// ============================================================================

/// Fixed set of response strategies for a delayed shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MitigationType {
    AirFreight,
    AlternateSourcing,
    InventoryBuffer,
    ProductionAdjustment,
    DynamicRerouting,
}

impl MitigationType {
    pub const ALL: [MitigationType; 5] = [
        MitigationType::AirFreight,
        MitigationType::AlternateSourcing,
        MitigationType::InventoryBuffer,
        MitigationType::ProductionAdjustment,
        MitigationType::DynamicRerouting,
    ];

    /// Wire name, e.g. "air-freight"
    pub fn as_str(self) -> &'static str {
        match self {
            MitigationType::AirFreight => "air-freight",
            MitigationType::AlternateSourcing => "alternate-sourcing",
            MitigationType::InventoryBuffer => "inventory-buffer",
            MitigationType::ProductionAdjustment => "production-adjustment",
            MitigationType::DynamicRerouting => "dynamic-rerouting",
        }
    }

    /// Display label for tables, e.g. "AIR FREIGHT"
    pub fn method_label(self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }
}

impl std::fmt::Display for MitigationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Ranking weight: high outranks medium outranks low
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// How much weight a confidence score carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            90.. => ConfidenceBand::High,
            75..=89 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        }
    }
}

/// Urgency of a delay relative to on-hand inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelaySeverity {
    /// Stock runs out before the shipment arrives
    Critical,
    /// Shipment lands within two days of stockout
    Warning,
    Safe,
}

impl DelaySeverity {
    pub fn classify(delay_days: u32, inventory_days_remaining: u32) -> Self {
        if delay_days > inventory_days_remaining {
            DelaySeverity::Critical
        } else if u64::from(delay_days) + 2 > u64::from(inventory_days_remaining) {
            DelaySeverity::Warning
        } else {
            DelaySeverity::Safe
        }
    }

    /// Two-level label used in analysis text
    pub fn criticality_label(delay_days: u32, inventory_days_remaining: u32) -> &'static str {
        if delay_days > inventory_days_remaining {
            "CRITICAL"
        } else {
            "MODERATE"
        }
    }
}

// ============================================================================
// Actions and Recommendations
// ============================================================================

/// One candidate response to a delay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationAction {
    #[serde(rename = "type")]
    pub kind: MitigationType,
    pub description: String,
    pub action: String,
    pub priority: Priority,
    /// Currency units
    pub estimated_cost: u32,
    /// Days to put the action in place
    pub estimated_time: u32,
    /// 0-100
    pub confidence: u8,
}

impl MitigationAction {
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Engine output for one trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationRecommendation {
    pub sku: String,
    pub supplier_name: String,
    pub delay_days: u32,
    pub reason: String,
    pub inventory_days_remaining: u32,
    pub recommended_action: MitigationAction,
    /// Remaining fired actions in ranking order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_actions: Vec<MitigationAction>,
    pub analysis: String,
}

impl MitigationRecommendation {
    pub fn severity(&self) -> DelaySeverity {
        DelaySeverity::classify(self.delay_days, self.inventory_days_remaining)
    }
}
