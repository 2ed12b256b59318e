//! Delay mitigation engine.
//!
//! Maps a [`DelayTrigger`] to a [`MitigationRecommendation`]:
//!
//! - `rules`: the ordered heuristic rules and the air-freight fallback
//! - `catalog`: canonical action templates per mitigation type
//! - `summary`: batch counts by severity and recommended type
//!
//! The engine is a pure function of the trigger and the injected
//! [`ProximityTable`]; batches are mapped element by element.

mod catalog;
mod rules;
mod summary;

pub use catalog::ActionTemplate;
pub use rules::{
    AIR_FREIGHT_CONFIDENCE, ALTERNATE_SOURCING_CONFIDENCE, DYNAMIC_REROUTING_CONFIDENCE,
    FALLBACK_AIR_FREIGHT_CONFIDENCE, INVENTORY_BUFFER_CONFIDENCE, MAX_TRANSFER_UNITS,
    PRODUCTION_ADJUSTMENT_CONFIDENCE, RULES, RuleContext, RuleDefinition, evaluate_rules,
};
pub use summary::RecommendationSummary;

use std::cmp::Reverse;

use tracing::{debug, info, warn};

use crate::config::ProximityTable;
use crate::error::MitigationError;
use crate::models::{DelaySeverity, DelayTrigger, MitigationAction, MitigationRecommendation};

// ============================================================================
// Mitigation Engine
// ============================================================================

/// Rule-based recommender for delivery delays
#[derive(Debug, Clone, Default)]
pub struct MitigationEngine {
    proximity: ProximityTable,
}

impl MitigationEngine {
    /// Create an engine with the built-in proximity table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a caller-supplied proximity table
    pub fn with_proximity(proximity: ProximityTable) -> Self {
        Self { proximity }
    }

    pub fn proximity(&self) -> &ProximityTable {
        &self.proximity
    }

    /// Analyze one trigger and pick the best-ranked mitigation.
    ///
    /// Fails with [`MitigationError::InvalidTrigger`] for structurally invalid
    /// input and [`MitigationError::NoApplicableMitigation`] when no rule fires
    /// and the delay does not outlast inventory.
    pub fn analyze_delay(
        &self,
        trigger: &DelayTrigger,
    ) -> Result<MitigationRecommendation, MitigationError> {
        trigger.validate()?;

        let ctx = RuleContext {
            trigger,
            proximity: &self.proximity,
        };
        let mut ranked = rank_actions(evaluate_rules(&ctx)).into_iter();

        let Some(recommended_action) = ranked.next() else {
            debug!(sku = %trigger.sku, "No mitigation applies");
            return Err(MitigationError::NoApplicableMitigation {
                sku: trigger.sku.clone(),
            });
        };
        let alternative_actions: Vec<MitigationAction> = ranked.collect();

        debug!(
            sku = %trigger.sku,
            recommended = %recommended_action.kind,
            confidence = recommended_action.confidence,
            alternatives = alternative_actions.len(),
            "Recommendation ready"
        );

        let analysis = generate_analysis(trigger, &recommended_action);

        Ok(MitigationRecommendation {
            sku: trigger.sku.clone(),
            supplier_name: trigger.supplier_name.clone(),
            delay_days: trigger.delay_days,
            reason: trigger.reason.clone(),
            inventory_days_remaining: trigger.inventory_days_remaining,
            recommended_action,
            alternative_actions,
            analysis,
        })
    }

    /// Analyze each trigger independently; output order matches input order.
    pub fn process_delay_triggers(
        &self,
        triggers: &[DelayTrigger],
    ) -> Vec<Result<MitigationRecommendation, MitigationError>> {
        let results: Vec<_> = triggers
            .iter()
            .map(|trigger| self.analyze_delay(trigger))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(
                "{} of {} triggers produced no recommendation",
                failed,
                triggers.len()
            );
        }
        info!("Processed {} delay triggers", triggers.len());

        results
    }
}

/// Sort by confidence, then priority rank, both descending.
///
/// `sort_by_key` is stable, so remaining ties keep rule order.
pub fn rank_actions(mut actions: Vec<MitigationAction>) -> Vec<MitigationAction> {
    actions.sort_by_key(|action| (Reverse(action.confidence), Reverse(action.priority.rank())));
    actions
}

/// Fixed-template rationale for the chosen action
pub fn generate_analysis(trigger: &DelayTrigger, action: &MitigationAction) -> String {
    let criticality =
        DelaySeverity::criticality_label(trigger.delay_days, trigger.inventory_days_remaining);

    format!(
        "Delay is {} - {} days delay with only {} days of inventory remaining. \
         Reason: {}. Recommended action: {} with {}% confidence. \
         Estimated cost: ${} and {} days to implement.",
        criticality,
        trigger.delay_days,
        trigger.inventory_days_remaining,
        trigger.reason,
        action.description,
        action.confidence,
        action.estimated_cost,
        action.estimated_time
    )
}
