use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ProximityTable;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Known DC/demand-point proximity pairs used by dynamic rerouting
    #[serde(default)]
    pub proximity: ProximityTable,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How recommendations are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON array
    #[default]
    Json,
    /// Fixed-column text table
    Table,
    /// Detailed per-recommendation narrative
    Report,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format printed to stdout
    #[serde(default)]
    pub format: OutputFormat,
    /// Directory for report files; nothing is written when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Settings {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Load configuration, falling back to the user config file and then defaults
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) if p.exists() => Self::from_file(p),
            Some(p) => anyhow::bail!("Config file does not exist: {:?}", p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/delay-mitigation/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("delay-mitigation").join("config.yaml"))
    }
}
