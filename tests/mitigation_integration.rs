//! Integration tests for the delay mitigation engine.
//!
//! These tests drive the public API end to end:
//! - Rule outcomes for the sample triggers
//! - Email text to recommendation
//! - Ranking properties over generated triggers
//! - Table and JSON renderings
//! - Configuration-supplied proximity tables

use chrono::NaiveDate;

use delay_mitigation::{
    AlternateSupplier, DelayTrigger, LocationPair, MitigationEngine, MitigationError,
    MitigationRecommendation, MitigationType, ProximityTable, Settings, parse_email_content,
    to_json, to_table,
};
use delay_mitigation::fixtures::{SAMPLE_EMAIL, sample_delay_triggers};

fn eta() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
}

fn trigger(sku: &str, delay_days: u32, inventory_days_remaining: u32) -> DelayTrigger {
    DelayTrigger::new(sku, "Acme", eta(), delay_days, "Port congestion", inventory_days_remaining)
}

fn analyze_samples() -> Vec<MitigationRecommendation> {
    MitigationEngine::new()
        .process_delay_triggers(&sample_delay_triggers())
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("every sample trigger has a mitigation")
}

// ============================================================================
// Sample Scenarios
// ============================================================================

#[test]
fn test_sample_recommendations() {
    let recs = analyze_samples();
    let summary: Vec<(&str, MitigationType, u8)> = recs
        .iter()
        .map(|r| {
            (
                r.sku.as_str(),
                r.recommended_action.kind,
                r.recommended_action.confidence,
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("ECU-101", MitigationType::AlternateSourcing, 85),
            ("MOTOR-204", MitigationType::InventoryBuffer, 90),
            ("PCB-501", MitigationType::AlternateSourcing, 85),
            ("SENSOR-302", MitigationType::ProductionAdjustment, 75),
            ("BATTERY-405", MitigationType::InventoryBuffer, 90),
            ("DISPLAY-608", MitigationType::AlternateSourcing, 85),
        ]
    );
}

#[test]
fn test_motor_scenario_uses_inventory_buffer_only() {
    let recs = analyze_samples();
    let motor = &recs[1];

    assert_eq!(motor.sku, "MOTOR-204");
    assert_eq!(motor.recommended_action.kind, MitigationType::InventoryBuffer);
    assert_eq!(motor.recommended_action.confidence, 90);
    assert_eq!(
        motor.recommended_action.action,
        "Transfer 100 units from Chicago DC"
    );
    assert!(motor.alternative_actions.is_empty());
    assert!(motor.analysis.starts_with("Delay is CRITICAL - 10 days delay with only 5 days"));
}

#[test]
fn test_alternate_sourcing_names_supplier() {
    let recs = analyze_samples();
    assert_eq!(
        recs[5].recommended_action.action,
        "Use DisplayPro instead of ScreenMasters"
    );
}

// ============================================================================
// Email to Recommendation
// ============================================================================

#[test]
fn test_email_round_trip_to_recommendation() {
    let trigger = parse_email_content(SAMPLE_EMAIL).expect("sample email parses");
    assert_eq!(trigger.sku, "ECU-101");
    assert_eq!(trigger.delay_days, 7);
    assert_eq!(trigger.inventory_days_remaining, 2);
    assert_eq!(trigger.reason, "Port congestion");

    // Email carries no alternates or DC stock, so reactive air freight applies
    let rec = MitigationEngine::new().analyze_delay(&trigger).unwrap();
    assert_eq!(rec.recommended_action.kind, MitigationType::AirFreight);
    assert_eq!(rec.recommended_action.confidence, 95);
    assert!(rec.alternative_actions.is_empty());
}

#[test]
fn test_email_missing_marker_yields_none() {
    let email = SAMPLE_EMAIL.replace("Reason: Port congestion", "Cause: Port congestion");
    assert!(parse_email_content(&email).is_none());
}

// ============================================================================
// Rule Properties
// ============================================================================

#[test]
fn test_reactive_air_freight_property() {
    let engine = MitigationEngine::new();
    for inventory in 0..10 {
        for delay in (inventory + 1)..(inventory + 12) {
            let rec = engine.analyze_delay(&trigger("P", delay, inventory)).unwrap();
            assert_eq!(rec.recommended_action.kind, MitigationType::AirFreight);
            assert_eq!(rec.recommended_action.confidence, 95);
        }
    }
}

#[test]
fn test_inventory_buffer_property() {
    let engine = MitigationEngine::new();
    for stock in [1, 50, 99, 100, 101, 5000] {
        let rec = engine
            .analyze_delay(&trigger("P", 4, 4).with_other_dc(stock, "Dallas DC"))
            .unwrap();
        let buffer = std::iter::once(&rec.recommended_action)
            .chain(&rec.alternative_actions)
            .find(|a| a.kind == MitigationType::InventoryBuffer)
            .expect("inventory buffer fires for positive stock");
        assert_eq!(buffer.confidence, 90);
        assert!(buffer.action.contains(&stock.min(100).to_string()));
    }
}

#[test]
fn test_ranking_is_sorted_across_generated_triggers() {
    let engine = MitigationEngine::new();
    for delay in 0..8 {
        for inventory in 0..8 {
            for production_impact in [false, true] {
                let t = trigger("R", delay, inventory)
                    .with_alternate(AlternateSupplier::new("Beta", 6, 80))
                    .with_other_dc(20, "New York DC")
                    .with_demand_location("Boston")
                    .with_production_impact(production_impact);

                let rec = engine.analyze_delay(&t).unwrap();
                let ranked: Vec<_> = std::iter::once(&rec.recommended_action)
                    .chain(&rec.alternative_actions)
                    .collect();
                for pair in ranked.windows(2) {
                    let key = |a: &&delay_mitigation::MitigationAction| {
                        (a.confidence, a.priority.rank())
                    };
                    assert!(key(&pair[0]) >= key(&pair[1]), "{:?}", ranked);
                }
            }
        }
    }
}

#[test]
fn test_no_applicable_mitigation_is_explicit() {
    let result = MitigationEngine::new().analyze_delay(&trigger("CALM-1", 1, 30));
    assert!(matches!(
        result,
        Err(MitigationError::NoApplicableMitigation { ref sku }) if sku == "CALM-1"
    ));
}

// ============================================================================
// Proximity Table Injection
// ============================================================================

#[test]
fn test_config_supplied_proximity_table() {
    let settings: Settings = serde_yaml::from_str(
        "proximity:\n  - dc: Seattle DC\n    demand: Portland\n",
    )
    .unwrap();
    let engine = MitigationEngine::with_proximity(settings.proximity);

    let t = trigger("ROUTE-1", 2, 9)
        .with_other_dc(0, "Seattle DC")
        .with_demand_location("Portland");
    let rec = engine.analyze_delay(&t).unwrap();
    assert_eq!(rec.recommended_action.kind, MitigationType::DynamicRerouting);
    assert_eq!(
        rec.recommended_action.action,
        "Source from Seattle DC (closer to Portland)"
    );

    // The default table does not know this pair
    assert!(MitigationEngine::new().analyze_delay(&t).is_err());
}

#[test]
fn test_empty_proximity_table_disables_rerouting() {
    let engine = MitigationEngine::with_proximity(ProximityTable::empty());
    let t = trigger("ROUTE-2", 12, 3)
        .with_other_dc(150, "Los Angeles DC")
        .with_demand_location("San Francisco");
    let rec = engine.analyze_delay(&t).unwrap();
    assert!(rec.alternative_actions.is_empty());

    let engine = MitigationEngine::with_proximity(ProximityTable::new(vec![LocationPair::new(
        "Los Angeles DC",
        "San Francisco",
        true,
    )]));
    assert_eq!(engine.analyze_delay(&t).unwrap().alternative_actions.len(), 1);
}

// ============================================================================
// Renderings
// ============================================================================

#[test]
fn test_table_for_sample_batch() {
    let table = to_table(&analyze_samples());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("SKU         | Supplier         | Delay Days |"));
    assert_eq!(
        lines[3],
        "MOTOR-204   | DriveMakers      | 10         | 5              | INVENTORY BUFFER      | \
         Transfer 100 units from Chicago DC              | 90%        | $200 "
    );
    assert!(lines[5].contains("| PRODUCTION ADJUSTMENT |"));
    assert!(lines[2].contains("| ALTERNATE SOURCING    |"));
}

#[test]
fn test_json_is_array_of_recommendations() {
    let json = to_json(&analyze_samples()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["recommendedAction"]["type"], "alternate-sourcing");
    assert_eq!(items[4]["alternativeActions"][0]["type"], "dynamic-rerouting");
    assert!(items[1].get("alternativeActions").is_none());
}
