//! # Input Configuration Module
//!
//! This module provides configuration parsing for inspection jobs. A job
//! names the dataset to open, the record-dimension convention to look up,
//! and whether the report should carry dataset context.
//!
//! Configurations can be loaded from JSON or YAML files (chosen by file
//! extension) or built directly. The record-dimension name is a
//! configuration parameter rather than a hard-coded literal because the
//! unlimited dimension's name is a producer convention, not a standard:
//! Argo profile files use `N_REC`, model output frequently uses `time`.
//!
//! ## Example Usage
//!
//! ```rust
//! use ncinspect::input::InspectConfig;
//!
//! let json = r#"
//! {
//!   "path": "nodc_D1900975_339.nc",
//!   "record_dim": "N_REC"
//! }"#;
//! let config = InspectConfig::from_json(json)?;
//! assert_eq!(config.record_dim, "N_REC");
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Record-dimension name assumed when none is configured
pub const DEFAULT_RECORD_DIM: &str = "N_REC";

/// Configuration for one inspection job.
///
/// # Examples
///
/// ```rust
/// use ncinspect::input::InspectConfig;
///
/// let mut config = InspectConfig::new("argo_2019_01/nodc_D1900975_339.nc");
/// assert_eq!(config.record_dim, "N_REC");
/// config.record_dim = "time".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectConfig {
    /// Path to the dataset to inspect
    pub path: String,
    /// Name of the record dimension to look up
    #[serde(default = "default_record_dim")]
    pub record_dim: String,
    /// Include dataset context (path, format, file size) in human output
    #[serde(default)]
    pub detailed: bool,
}

fn default_record_dim() -> String {
    DEFAULT_RECORD_DIM.to_string()
}

impl InspectConfig {
    /// Builds a configuration for `path` with the default record-dimension
    /// convention.
    pub fn new(path: impl Into<String>) -> Self {
        InspectConfig {
            path: path.into(),
            record_dim: default_record_dim(),
            detailed: false,
        }
    }

    /// Loads a configuration from a JSON or YAML file.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` parse as YAML,
    /// everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config in {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config in {}", path.display()))?
        };
        Ok(config)
    }

    /// Loads a configuration from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config = serde_json::from_str(json_str).context("Invalid JSON config")?;
        Ok(config)
    }
}
