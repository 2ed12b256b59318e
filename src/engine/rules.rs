//! Mitigation rules, evaluated in table order.

use tracing::debug;

use crate::config::ProximityTable;
use crate::models::{DelayTrigger, MitigationAction, MitigationType};

/// Units moved from a secondary DC in one transfer
pub const MAX_TRANSFER_UNITS: u32 = 100;

pub const AIR_FREIGHT_CONFIDENCE: u8 = 95;
pub const ALTERNATE_SOURCING_CONFIDENCE: u8 = 85;
pub const INVENTORY_BUFFER_CONFIDENCE: u8 = 90;
pub const PRODUCTION_ADJUSTMENT_CONFIDENCE: u8 = 75;
pub const DYNAMIC_REROUTING_CONFIDENCE: u8 = 80;
pub const FALLBACK_AIR_FREIGHT_CONFIDENCE: u8 = 70;

/// Days of slack beyond remaining inventory that production can absorb
const PRODUCTION_SLACK_DAYS: u64 = 3;

/// Inputs visible to a rule
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub trigger: &'a DelayTrigger,
    pub proximity: &'a ProximityTable,
}

/// A heuristic that may propose one action for a trigger
pub struct RuleDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub evaluate: fn(&RuleContext<'_>) -> Option<MitigationAction>,
}

pub const RULES: &[RuleDefinition] = &[
    RuleDefinition {
        name: "air_freight",
        description: "Delay outlasts inventory and no alternate supplier or DC stock exists",
        evaluate: rule_air_freight,
    },
    RuleDefinition {
        name: "alternate_sourcing",
        description: "Fastest alternate supplier delivers before stock runs out",
        evaluate: rule_alternate_sourcing,
    },
    RuleDefinition {
        name: "inventory_buffer",
        description: "Stock is available at another distribution center",
        evaluate: rule_inventory_buffer,
    },
    RuleDefinition {
        name: "production_adjustment",
        description: "Production is affected but the delay fits within slack",
        evaluate: rule_production_adjustment,
    },
    RuleDefinition {
        name: "dynamic_rerouting",
        description: "Other DC is closer to the demand point",
        evaluate: rule_dynamic_rerouting,
    },
];

/// Run every rule in order, then the fallback if nothing fired
pub fn evaluate_rules(ctx: &RuleContext<'_>) -> Vec<MitigationAction> {
    let fired: Vec<MitigationAction> = RULES
        .iter()
        .filter_map(|rule| {
            let action = (rule.evaluate)(ctx)?;
            debug!(
                sku = %ctx.trigger.sku,
                rule = rule.name,
                confidence = action.confidence,
                "Rule fired"
            );
            Some(action)
        })
        .collect();

    if !fired.is_empty() {
        return fired;
    }

    match rule_fallback(ctx) {
        Some(action) => {
            debug!(sku = %ctx.trigger.sku, "No rule fired, falling back to air freight");
            vec![action]
        }
        None => Vec::new(),
    }
}

fn rule_air_freight(ctx: &RuleContext<'_>) -> Option<MitigationAction> {
    let trigger = ctx.trigger;
    let fires = trigger.is_critical()
        && trigger.alternate_suppliers.is_empty()
        && trigger.available_dc_stock().is_none();

    fires.then(|| {
        MitigationType::AirFreight
            .template()
            .with_confidence(AIR_FREIGHT_CONFIDENCE)
    })
}

fn rule_alternate_sourcing(ctx: &RuleContext<'_>) -> Option<MitigationAction> {
    let trigger = ctx.trigger;

    // First occurrence wins on equal lead times
    let best = trigger
        .alternate_suppliers
        .iter()
        .min_by_key(|supplier| supplier.lead_time)?;

    let window = u64::from(trigger.delay_days) + u64::from(trigger.inventory_days_remaining);
    if u64::from(best.lead_time) > window {
        return None;
    }

    Some(MitigationType::AlternateSourcing.template().with_action(
        format!("Use {} instead of {}", best.name, trigger.supplier_name),
        ALTERNATE_SOURCING_CONFIDENCE,
    ))
}

fn rule_inventory_buffer(ctx: &RuleContext<'_>) -> Option<MitigationAction> {
    let trigger = ctx.trigger;
    let stock = trigger.available_dc_stock()?;
    let location = trigger
        .other_dc_location
        .as_deref()
        .unwrap_or("other distribution center");

    Some(MitigationType::InventoryBuffer.template().with_action(
        format!(
            "Transfer {} units from {}",
            stock.min(MAX_TRANSFER_UNITS),
            location
        ),
        INVENTORY_BUFFER_CONFIDENCE,
    ))
}

fn rule_production_adjustment(ctx: &RuleContext<'_>) -> Option<MitigationAction> {
    let trigger = ctx.trigger;
    let within_slack = u64::from(trigger.delay_days)
        <= u64::from(trigger.inventory_days_remaining) + PRODUCTION_SLACK_DAYS;

    (trigger.production_impact && within_slack).then(|| {
        MitigationType::ProductionAdjustment
            .template()
            .with_confidence(PRODUCTION_ADJUSTMENT_CONFIDENCE)
    })
}

fn rule_dynamic_rerouting(ctx: &RuleContext<'_>) -> Option<MitigationAction> {
    let trigger = ctx.trigger;
    let dc = trigger.other_dc_location.as_deref()?;
    let demand = trigger.demand_location.as_deref()?;

    if !ctx.proximity.is_closer(dc, demand) {
        return None;
    }

    Some(MitigationType::DynamicRerouting.template().with_action(
        format!("Source from {} (closer to {})", dc, demand),
        DYNAMIC_REROUTING_CONFIDENCE,
    ))
}

fn rule_fallback(ctx: &RuleContext<'_>) -> Option<MitigationAction> {
    ctx.trigger.is_critical().then(|| {
        MitigationType::AirFreight
            .template()
            .with_confidence(FALLBACK_AIR_FREIGHT_CONFIDENCE)
    })
}
