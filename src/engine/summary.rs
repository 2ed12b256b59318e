use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{DelaySeverity, MitigationRecommendation, MitigationType};

/// Batch counts by delay severity and by recommended mitigation type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub total: usize,
    pub by_severity: BTreeMap<DelaySeverity, usize>,
    pub by_type: BTreeMap<MitigationType, usize>,
}

impl RecommendationSummary {
    pub fn from_recommendations(recommendations: &[MitigationRecommendation]) -> Self {
        let mut summary = Self {
            total: recommendations.len(),
            ..Self::default()
        };

        for rec in recommendations {
            *summary.by_severity.entry(rec.severity()).or_insert(0) += 1;
            *summary
                .by_type
                .entry(rec.recommended_action.kind)
                .or_insert(0) += 1;
        }

        summary
    }

    pub fn critical_count(&self) -> usize {
        self.by_severity
            .get(&DelaySeverity::Critical)
            .copied()
            .unwrap_or(0)
    }
}
