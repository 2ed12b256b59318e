pub mod config;
pub mod email;
pub mod engine;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod output;
pub mod schema;

// Re-export main types
pub use config::{LocationPair, OutputFormat, ProximityTable, Settings};
pub use engine::{MitigationEngine, RecommendationSummary};
pub use error::{EmailParseError, MitigationError, SchemaError};
pub use models::{
    AlternateSupplier, ConfidenceBand, DelaySeverity, DelayTrigger, MitigationAction,
    MitigationRecommendation, MitigationType, Priority,
};

// Re-export parsing and rendering entry points
pub use email::{parse_email_content, parse_email_detailed};
pub use output::{FileReportWriter, ReportWriter, render_report, to_json, to_table};
