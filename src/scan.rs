//! Directory scanning for NetCDF files
//!
//! Walks a source directory, applies the metadata extractor to every file
//! with a `.nc` extension, and collects one record per file. A file that
//! cannot be read yields a record with no value; the scan keeps going. A
//! missing or unreadable root directory fails the whole call.

use crate::errors::{NcMetaScanError, Result};
use crate::metadata::{read_metadata, FileMetadata};
use std::path::Path;
use walkdir::WalkDir;

/// File extension matched by the scan.
const NETCDF_EXTENSION: &str = "nc";

/// One scanned file: its base name and the extracted metadata.
///
/// `value` is `None` exactly when extraction failed for that file.
#[derive(Debug, Clone)]
pub struct MetadataRecord {
    pub fname: String,
    pub value: Option<FileMetadata>,
}

/// Operator-facing message for a failed extraction.
///
/// The NetCDF variant already carries its own prefix, so its inner message is
/// reported directly instead of double-prefixed.
pub fn extraction_error_message(e: &NcMetaScanError) -> String {
    match e {
        NcMetaScanError::NetCDFError(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

fn is_netcdf_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == NETCDF_EXTENSION)
            .unwrap_or(false)
}

/// Reads metadata from all NetCDF files in the given directory.
///
/// Non-recursive mode matches files directly in `src_dir`; recursive mode
/// descends into all subdirectories to unbounded depth. Records come back in
/// filesystem enumeration order; no sort is applied. Extraction failures are
/// reported on stderr and absorbed into the per-file record, so one bad file
/// never aborts the batch.
pub fn read_metadata_from_directory(src_dir: &Path, recursive: bool) -> Result<Vec<MetadataRecord>> {
    let walker = if recursive {
        WalkDir::new(src_dir)
    } else {
        WalkDir::new(src_dir).max_depth(1)
    };

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !is_netcdf_file(path) {
            continue;
        }

        let fname = entry.file_name().to_string_lossy().into_owned();
        let value = match read_metadata(path) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                eprintln!("Error reading NetCDF file: {}", extraction_error_message(&e));
                None
            }
        };
        records.push(MetadataRecord { fname, value });
    }

    Ok(records)
}
