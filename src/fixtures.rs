//! Sample delay triggers and email used by the `demo` command.

use chrono::NaiveDate;

use crate::models::{AlternateSupplier, DelayTrigger};

/// A delay alert in the format understood by [`crate::email::parse_email_content`]
pub const SAMPLE_EMAIL: &str = "
Subject: Delivery Delay Alert - ECU-101

Dear Supply Chain Team,

We have received notification of a delivery delay:

SKU: ECU-101
Supplier: AlphaElectronics
ETA: 2024-02-15
Delay: 7 days
Reason: Port congestion
Inventory: 2 days remaining

Please take appropriate action.

Best regards,
Logistics Team
";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn supplier(id: &str, name: &str, lead_time: u32, reliability: u8, location: &str) -> AlternateSupplier {
    AlternateSupplier {
        id: Some(id.to_string()),
        location: Some(location.to_string()),
        ..AlternateSupplier::new(name, lead_time, reliability)
    }
}

/// Six representative delays covering every mitigation rule
pub fn sample_delay_triggers() -> Vec<DelayTrigger> {
    vec![
        DelayTrigger::new("ECU-101", "AlphaElectronics", date(2024, 2, 15), 7, "Port congestion", 2)
            .with_alternate(supplier("supplier-b", "BetaElectronics", 5, 85, "Taiwan")),
        DelayTrigger::new("MOTOR-204", "DriveMakers", date(2024, 2, 18), 10, "Capacity issues", 5)
            .with_other_dc(300, "Chicago DC"),
        DelayTrigger::new("PCB-501", "GreenCircuits", date(2024, 2, 12), 3, "Customs hold", 1)
            .with_alternate(supplier("supplier-c", "CircuitPro", 4, 90, "Mexico")),
        DelayTrigger::new(
            "SENSOR-302",
            "SensorTech",
            date(2024, 2, 20),
            5,
            "Quality inspection delay",
            8,
        )
        .with_production_impact(true),
        DelayTrigger::new(
            "BATTERY-405",
            "PowerCell",
            date(2024, 2, 22),
            12,
            "Transportation strike",
            3,
        )
        .with_other_dc(150, "Los Angeles DC")
        .with_demand_location("San Francisco"),
        DelayTrigger::new(
            "DISPLAY-608",
            "ScreenMasters",
            date(2024, 2, 25),
            15,
            "Component shortage",
            1,
        )
        .with_alternate(supplier("supplier-d", "DisplayPro", 8, 75, "South Korea")),
    ]
}
