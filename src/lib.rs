//! # ncinspect
//!
//! A Rust library and CLI for inspecting the dimensions of netCDF datasets.
//!
//! ## Features
//!
//! - **Record-dimension lookup**: Reports the current length of a
//!   conventionally named record dimension (`N_REC` by default, configurable
//!   per producer), with a typed "absent" outcome instead of an error when
//!   the dataset defines none
//! - **Full dimension listing**: Every dimension with its length, in the
//!   order the dimensions were defined in the file
//! - **Container detection**: Classic CDF-1, 64-bit offset CDF-2, CDF-5, and
//!   HDF5-based netCDF-4 files recognized from their magic bytes
//! - **Structured output**: Human, JSON, YAML, and CSV report formats
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ncinspect::{inspect_dataset, input::InspectConfig};
//!
//! let config = InspectConfig::new("nodc_D1900975_339.nc");
//! let report = inspect_dataset(&config)?;
//!
//! println!("NumRecs: {}", report.summary.record_count);
//! for dim in &report.summary.dimensions {
//!     println!("{} = {}", dim.name(), dim.size());
//! }
//! # Ok::<(), ncinspect::error::InspectError>(())
//! ```

pub mod cli;
pub mod error;
pub mod format;
pub mod input;
pub mod inspect;
pub mod log;


#[cfg(test)]
mod cli_tests;

use crate::error::{InspectError, InspectResult};
use crate::format::sniff_format;
use crate::input::InspectConfig;
use crate::inspect::{DimensionReport, describe};

/// Inspects the dataset named by the configuration.
///
/// This function orchestrates the whole inspection:
/// 1. Sniffs the container format from the file's magic bytes
/// 2. Opens the dataset read-only
/// 3. Queries the record dimension and enumerates all dimensions
/// 4. Closes the handle and assembles the report
///
/// The handle is scoped to this call: it is closed explicitly on the
/// success path and released by RAII on every error path, so the backing
/// file descriptor is never leaked.
///
/// # Errors
///
/// Returns an error if the path cannot be read, the file is not a
/// recognized netCDF container, or the library fails to open it. A missing
/// record dimension is not an error; it surfaces as
/// [`inspect::RecordCount::Absent`] in the report.
pub fn inspect_dataset(config: &InspectConfig) -> InspectResult<DimensionReport> {
    let format = sniff_format(&config.path)?;

    ::log::debug!("opening dataset: {}", config.path);
    let file = netcdf::open(&config.path).map_err(|source| InspectError::Open {
        path: config.path.clone(),
        source,
    })?;

    let summary = describe(&file, &config.record_dim)?;
    let file_size = std::fs::metadata(&config.path).ok().map(|meta| meta.len());
    file.close()?;

    let total_dimensions = summary.dimensions.len();
    Ok(DimensionReport {
        path: config.path.clone(),
        format,
        record_dim: config.record_dim.clone(),
        summary,
        total_dimensions,
        file_size,
    })
}
