//! # Error Module
//!
//! Error taxonomy for dataset inspection. Failures here are boundary
//! failures (the file cannot be opened or is not a recognized container);
//! a missing record dimension is not an error and is represented as
//! [`crate::inspect::RecordCount::Absent`] instead.

use thiserror::Error;

/// Errors that can occur while opening and inspecting a dataset
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open dataset '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: netcdf::Error,
    },

    #[error("'{path}' is not a recognized netCDF container (magic bytes {magic:02x?})")]
    UnrecognizedFormat { path: String, magic: Vec<u8> },

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("netCDF error: {0}")]
    Netcdf(#[from] netcdf::Error),
}

/// Result type for inspection operations
pub type InspectResult<T> = Result<T, InspectError>;
