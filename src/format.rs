//! # Container Format Module
//!
//! Detects which member of the netCDF family a file belongs to by reading
//! its magic bytes. Classic files start with `CDF` followed by a version
//! byte; netCDF-4 files carry the 8-byte HDF5 signature. Anything else is
//! rejected before the library open step runs.

use crate::error::{InspectError, InspectResult};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const CDF_MAGIC: &[u8; 3] = b"CDF";
const HDF5_MAGIC: [u8; 8] = [0x89, b'H', b'D', b'F', b'\r', b'\n', 0x1a, b'\n'];

/// The on-disk container variant of a netCDF dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    /// Classic format (CDF-1)
    Classic,
    /// 64-bit offset format (CDF-2)
    Offset64,
    /// 64-bit data format (CDF-5)
    Cdf5,
    /// HDF5-based format (netCDF-4)
    Hdf5,
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContainerFormat::Classic => "Classic (CDF-1)",
            ContainerFormat::Offset64 => "64-bit Offset (CDF-2)",
            ContainerFormat::Cdf5 => "64-bit Data (CDF-5)",
            ContainerFormat::Hdf5 => "HDF5 (netCDF-4)",
        };
        write!(f, "{}", label)
    }
}

/// Classifies a file by its leading magic bytes.
///
/// Reads at most 8 bytes. Files shorter than a complete magic sequence are
/// reported as unrecognized rather than as I/O failures.
pub fn sniff_format<P: AsRef<Path>>(path: P) -> InspectResult<ContainerFormat> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InspectError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut magic = Vec::with_capacity(HDF5_MAGIC.len());
    file.take(HDF5_MAGIC.len() as u64)
        .read_to_end(&mut magic)
        .map_err(|source| InspectError::Io {
            path: path.display().to_string(),
            source,
        })?;

    if magic.as_slice() == HDF5_MAGIC {
        return Ok(ContainerFormat::Hdf5);
    }

    if magic.len() >= 4 && &magic[..3] == CDF_MAGIC {
        match magic[3] {
            1 => return Ok(ContainerFormat::Classic),
            2 => return Ok(ContainerFormat::Offset64),
            5 => return Ok(ContainerFormat::Cdf5),
            _ => {}
        }
    }

    Err(InspectError::UnrecognizedFormat {
        path: path.display().to_string(),
        magic,
    })
}
