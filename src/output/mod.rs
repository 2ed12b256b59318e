pub mod files;
pub mod format;

pub use files::*;
pub use format::{render_report, to_json, to_table};

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{DelayTrigger, MitigationRecommendation};

/// Trait for persisting recommendation reports
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Write recommendations as a JSON array
    async fn write_json(&self, recommendations: &[MitigationRecommendation]) -> Result<PathBuf>;

    /// Write the fixed-column table
    async fn write_table(&self, recommendations: &[MitigationRecommendation]) -> Result<PathBuf>;

    /// Write the detailed narrative report
    async fn write_report(&self, recommendations: &[MitigationRecommendation]) -> Result<PathBuf>;

    /// Write triggers extracted from email
    async fn write_triggers(&self, triggers: &[DelayTrigger]) -> Result<PathBuf>;

    /// Write every recommendation rendering
    async fn write_all(&self, recommendations: &[MitigationRecommendation]) -> Result<Vec<PathBuf>> {
        Ok(vec![
            self.write_json(recommendations).await?,
            self.write_table(recommendations).await?,
            self.write_report(recommendations).await?,
        ])
    }
}
