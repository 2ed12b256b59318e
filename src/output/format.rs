//! Text renderings of recommendation batches.

use minijinja::{Environment, context};

use crate::engine::RecommendationSummary;
use crate::models::MitigationRecommendation;

const TABLE_HEADERS: [&str; 8] = [
    "SKU",
    "Supplier",
    "Delay Days",
    "Inventory Days",
    "Mitigation Method",
    "Action",
    "Confidence",
    "Cost",
];

const REPORT_TEMPLATE: &str = "\
Delay Mitigation Report: {{ total }} recommendation(s), {{ critical }} critical
{% for rec in recommendations %}

{{ loop.index }}. {{ rec.sku }} - {{ rec.supplierName }}
   Delay: {{ rec.delayDays }} days ({{ rec.reason }})
   Inventory: {{ rec.inventoryDaysRemaining }} days remaining
   Recommendation: {{ rec.recommendedAction.description }}
   Action: {{ rec.recommendedAction.action }}
   Confidence: {{ rec.recommendedAction.confidence }}%
   Cost: ${{ rec.recommendedAction.estimatedCost }}
   Time: {{ rec.recommendedAction.estimatedTime }} days
   Analysis: {{ rec.analysis }}
{% if rec.alternativeActions %}
   Alternative actions:
{% for alt in rec.alternativeActions %}
     - {{ alt.description }} ({{ alt.confidence }}% confidence)
{% endfor %}
{% endif %}
{% endfor %}
";

/// Indented JSON array of recommendations
pub fn to_json(recommendations: &[MitigationRecommendation]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(recommendations)
}

fn table_row(rec: &MitigationRecommendation) -> [String; 8] {
    let action = &rec.recommended_action;
    [
        rec.sku.clone(),
        rec.supplier_name.clone(),
        rec.delay_days.to_string(),
        rec.inventory_days_remaining.to_string(),
        action.kind.method_label(),
        action.action.clone(),
        format!("{}%", action.confidence),
        format!("${}", action.estimated_cost),
    ]
}

/// Fixed-column text table, one row per recommendation.
///
/// Columns are padded to their widest cell, header included.
pub fn to_table(recommendations: &[MitigationRecommendation]) -> String {
    let header: [String; 8] = TABLE_HEADERS.map(String::from);
    let rows: Vec<[String; 8]> = recommendations.iter().map(table_row).collect();

    let widths: [usize; 8] = std::array::from_fn(|i| {
        rows.iter()
            .map(|row| row[i].chars().count())
            .chain(std::iter::once(header[i].chars().count()))
            .max()
            .unwrap_or(0)
    });

    let format_row = |row: &[String; 8]| -> String {
        row.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let separator = widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&header));
    lines.push(separator);
    lines.extend(rows.iter().map(format_row));
    lines.join("\n")
}

/// Numbered narrative with analysis and alternatives for each recommendation
pub fn render_report(
    recommendations: &[MitigationRecommendation],
) -> Result<String, minijinja::Error> {
    let summary = RecommendationSummary::from_recommendations(recommendations);

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template("report.txt", REPORT_TEMPLATE)?;

    env.get_template("report.txt")?.render(context! {
        total => summary.total,
        critical => summary.critical_count(),
        recommendations => recommendations,
    })
}
