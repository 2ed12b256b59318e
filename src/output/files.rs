use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::models::{DelayTrigger, MitigationRecommendation};

use super::{ReportWriter, render_report, to_json, to_table};

pub const JSON_FILE: &str = "recommendations.json";
pub const TABLE_FILE: &str = "recommendations.txt";
pub const REPORT_FILE: &str = "report.txt";
pub const TRIGGERS_FILE: &str = "triggers.json";

/// Writes report files into a single output directory
pub struct FileReportWriter {
    dir: PathBuf,
}

impl FileReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn write_file(&self, name: &str, content: String) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .context("Failed to create output directory")?;

        let path = self.dir.join(name);
        fs::write(&path, content)
            .await
            .context(format!("Failed to write {:?}", path))?;

        info!("Wrote {:?}", path);
        Ok(path)
    }
}

#[async_trait]
impl ReportWriter for FileReportWriter {
    async fn write_json(&self, recommendations: &[MitigationRecommendation]) -> Result<PathBuf> {
        self.write_file(JSON_FILE, to_json(recommendations)?).await
    }

    async fn write_table(&self, recommendations: &[MitigationRecommendation]) -> Result<PathBuf> {
        let mut table = to_table(recommendations);
        table.push('\n');
        self.write_file(TABLE_FILE, table).await
    }

    async fn write_report(&self, recommendations: &[MitigationRecommendation]) -> Result<PathBuf> {
        let report = render_report(recommendations).context("Failed to render report")?;
        self.write_file(REPORT_FILE, report).await
    }

    async fn write_triggers(&self, triggers: &[DelayTrigger]) -> Result<PathBuf> {
        self.write_file(TRIGGERS_FILE, serde_json::to_string_pretty(triggers)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MitigationEngine;
    use crate::fixtures::sample_delay_triggers;

    fn sample_recs() -> Vec<MitigationRecommendation> {
        MitigationEngine::new()
            .process_delay_triggers(&sample_delay_triggers())
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[tokio::test]
    async fn test_write_all_creates_nested_dir() {
        let temp = tempfile::tempdir().unwrap();
        let writer = FileReportWriter::new(temp.path().join("out/reports"));

        let paths = writer.write_all(&sample_recs()).await.unwrap();
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert!(path.exists(), "{:?} should exist", path);
        }

        let json = std::fs::read_to_string(writer.dir().join(JSON_FILE)).unwrap();
        let parsed: Vec<MitigationRecommendation> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 6);

        let table = std::fs::read_to_string(writer.dir().join(TABLE_FILE)).unwrap();
        assert!(table.starts_with("SKU "));
        assert!(table.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_write_triggers() {
        let temp = tempfile::tempdir().unwrap();
        let writer = FileReportWriter::new(temp.path());

        let triggers = sample_delay_triggers();
        let path = writer.write_triggers(&triggers).await.unwrap();

        let parsed: Vec<DelayTrigger> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, triggers);
    }
}
