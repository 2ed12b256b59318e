//! Canonical action templates, one per mitigation type.
//!
//! Cost and time are fixed per type; only confidence and, for some rules,
//! the action text vary per trigger.

use crate::models::{MitigationAction, MitigationType, Priority};

/// Static fields of a mitigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTemplate {
    pub kind: MitigationType,
    pub description: &'static str,
    pub action: &'static str,
    pub priority: Priority,
    pub estimated_cost: u32,
    pub estimated_time: u32,
}

impl ActionTemplate {
    /// Instantiate with the template's own action text
    pub fn with_confidence(&self, confidence: u8) -> MitigationAction {
        self.build(self.action.to_string(), confidence)
    }

    /// Instantiate with trigger-specific action text
    pub fn with_action(&self, action: String, confidence: u8) -> MitigationAction {
        self.build(action, confidence)
    }

    fn build(&self, action: String, confidence: u8) -> MitigationAction {
        MitigationAction {
            kind: self.kind,
            description: self.description.to_string(),
            action,
            priority: self.priority,
            estimated_cost: self.estimated_cost,
            estimated_time: self.estimated_time,
            confidence,
        }
    }
}

impl MitigationType {
    pub fn template(self) -> ActionTemplate {
        match self {
            MitigationType::AirFreight => ActionTemplate {
                kind: self,
                description: "Expedite shipment via air freight",
                action: "Ship remaining units via Air Freight",
                priority: Priority::High,
                estimated_cost: 2500,
                estimated_time: 2,
            },
            MitigationType::AlternateSourcing => ActionTemplate {
                kind: self,
                description: "Switch to alternate supplier",
                action: "Use alternate supplier for remaining order",
                priority: Priority::Medium,
                estimated_cost: 500,
                estimated_time: 5,
            },
            MitigationType::InventoryBuffer => ActionTemplate {
                kind: self,
                description: "Use inventory from other DC",
                action: "Transfer stock from other distribution center",
                priority: Priority::Low,
                estimated_cost: 200,
                estimated_time: 1,
            },
            MitigationType::ProductionAdjustment => ActionTemplate {
                kind: self,
                description: "Adjust production schedule",
                action: "Reschedule production to accommodate delay",
                priority: Priority::Medium,
                estimated_cost: 1000,
                estimated_time: 3,
            },
            MitigationType::DynamicRerouting => ActionTemplate {
                kind: self,
                description: "Reroute from closer DC",
                action: "Source from closer distribution center",
                priority: Priority::Low,
                estimated_cost: 300,
                estimated_time: 2,
            },
        }
    }
}
