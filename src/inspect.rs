//! # Dimension Inspection Module
//!
//! This module provides the core dimension inspector: typed descriptions of
//! a dataset's dimensions, the record-dimension lookup, and rendering of the
//! resulting report in human, JSON, YAML, and CSV formats.
//!
//! The inspector is a pure query over an already-open handle. Opening the
//! file (and deciding whether it is a netCDF container at all) happens at
//! the boundary, in [`crate::inspect_dataset`].

use crate::error::{InspectError, InspectResult};
use crate::format::ContainerFormat;
use anyhow::{Context, Result};
use log::debug;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single named axis of a dataset.
///
/// Immutable value type with exactly two attributes: a non-empty name and a
/// current extent. An unlimited dimension that holds no records yet has a
/// size of zero, which is a legal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    name: String,
    size: usize,
}

impl Dimension {
    /// Builds a dimension descriptor, rejecting an empty name.
    pub fn new(name: impl Into<String>, size: usize) -> InspectResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(InspectError::InvalidDimension(
                "dimension name must not be empty".to_string(),
            ));
        }
        Ok(Dimension { name, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Outcome of the record-dimension lookup.
///
/// `Absent` means the dataset defines no dimension with the configured
/// record name. This is deliberately distinct from `Present(0)`, which is
/// an existing unlimited dimension that holds no records yet; the two are
/// conflated only at the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCount {
    Present(usize),
    Absent,
}

impl RecordCount {
    pub fn is_absent(&self) -> bool {
        matches!(self, RecordCount::Absent)
    }

    /// The record count, or `None` when no record dimension exists.
    pub fn count(&self) -> Option<usize> {
        match self {
            RecordCount::Present(n) => Some(*n),
            RecordCount::Absent => None,
        }
    }
}

impl fmt::Display for RecordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordCount::Present(n) => write!(f, "{}", n),
            RecordCount::Absent => write!(f, "No unlimited"),
        }
    }
}

impl Serialize for RecordCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordCount::Present(n) => serializer.serialize_u64(*n as u64),
            RecordCount::Absent => serializer.serialize_none(),
        }
    }
}

/// The dimension-level answer produced by [`describe`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionSummary {
    /// Result of the record-dimension lookup
    pub record_count: RecordCount,
    /// All dimensions, in the order they were defined in the file
    pub dimensions: Vec<Dimension>,
    /// Names of the dimensions the library flags as unlimited
    pub unlimited_dimensions: Vec<String>,
}

/// Complete report for one inspected dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionReport {
    pub path: String,
    pub format: ContainerFormat,
    /// The record-dimension name that was looked up
    pub record_dim: String,
    #[serde(flatten)]
    pub summary: DimensionSummary,
    pub total_dimensions: usize,
    pub file_size: Option<u64>,
}

/// Enumerates `(name, size)` pairs for every dimension in native order.
///
/// The sequence is lazy and restartable: calling this again on the same
/// handle re-enumerates from the start, in the same order.
pub fn dimension_pairs<'f>(
    file: &'f netcdf::File,
) -> impl Iterator<Item = (String, usize)> + 'f {
    file.dimensions().map(|dim| (dim.name().to_string(), dim.len()))
}

/// Queries an open dataset for its record count and dimension listing.
///
/// Looks up `record_dim` among the dataset's dimensions, capturing its
/// current length when present and [`RecordCount::Absent`] otherwise, then
/// enumerates all dimensions in native order. Read-only and idempotent:
/// repeated calls on the same unmodified handle yield identical summaries.
pub fn describe(file: &netcdf::File, record_dim: &str) -> InspectResult<DimensionSummary> {
    let record_count = match file.dimension(record_dim) {
        Some(dim) => RecordCount::Present(dim.len()),
        None => RecordCount::Absent,
    };

    let mut dimensions = Vec::new();
    let mut unlimited_dimensions = Vec::new();
    for dim in file.dimensions() {
        if dim.is_unlimited() {
            unlimited_dimensions.push(dim.name().to_string());
        }
        dimensions.push(Dimension::new(dim.name(), dim.len())?);
    }

    debug!(
        "described {} dimensions, record dimension '{}' -> {:?}",
        dimensions.len(),
        record_dim,
        record_count
    );

    Ok(DimensionSummary {
        record_count,
        dimensions,
        unlimited_dimensions,
    })
}

/// Renders the report in human-readable form.
///
/// The first line is the record count (`NumRecs: <n>` or
/// `NumRecs: No unlimited`), followed by `Dimensions:` and one
/// `<name> = <size>` line per dimension in native order. With `detailed`,
/// dataset context lines precede the listing and unlimited dimensions are
/// annotated.
pub fn render_human(report: &DimensionReport, detailed: bool) -> String {
    let mut out = String::new();

    if detailed {
        out.push_str(&format!("Dataset: {}\n", report.path));
        out.push_str(&format!("Format: {}\n", report.format));
        if let Some(size) = report.file_size {
            out.push_str(&format!(
                "File size: {:.2} MB\n",
                size as f64 / 1_048_576.0
            ));
        }
    }

    out.push_str(&format!("NumRecs: {}\n", report.summary.record_count));
    out.push_str("Dimensions:\n");
    for dim in &report.summary.dimensions {
        let unlimited = detailed
            && report
                .summary
                .unlimited_dimensions
                .iter()
                .any(|name| name == dim.name());
        out.push_str(&format!(
            "{} = {}{}\n",
            dim.name(),
            dim.size(),
            if unlimited { " (unlimited)" } else { "" }
        ));
    }

    out
}

/// Renders the dimension listing as CSV rows
pub fn render_csv(report: &DimensionReport) -> String {
    let mut out = String::from("name,size,unlimited\n");
    for dim in &report.summary.dimensions {
        let unlimited = report
            .summary
            .unlimited_dimensions
            .iter()
            .any(|name| name == dim.name());
        out.push_str(&format!("{},{},{}\n", dim.name(), dim.size(), unlimited));
    }
    out
}

/// Print the report in human-readable format
pub fn print_report_human(report: &DimensionReport, detailed: bool) {
    print!("{}", render_human(report, detailed));
}

/// Print the report in JSON format
pub fn print_report_json(report: &DimensionReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;
    println!("{}", json);
    Ok(())
}

/// Print the report in YAML format
pub fn print_report_yaml(report: &DimensionReport) -> Result<()> {
    let yaml =
        serde_yaml::to_string(report).context("Failed to serialize report to YAML")?;
    print!("{}", yaml);
    Ok(())
}

/// Print the report in CSV format (dimension listing only)
pub fn print_report_csv(report: &DimensionReport) {
    print!("{}", render_csv(report));
}
