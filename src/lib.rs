//! NcMetaScan: NetCDF global attribute harvesting
//!
//! A Rust library for extracting global attribute metadata from NetCDF
//! (Network Common Data Form) files and formatting it for display or for
//! downstream search indexing. NcMetaScan walks a directory of `.nc` files,
//! reads each file's global attribute table, and produces one record per
//! file; records can be rendered as indented text or JSON.
//!
//! ## Key Features
//!
//! - **Directory Scanning**: Flat or recursive enumeration of `.nc` files
//! - **Best-Effort Batches**: One unreadable file never aborts a scan
//! - **Faithful Values**: Attribute values are carried verbatim, with no
//!   numeric normalization
//! - **Two Output Forms**: Indented text for terminals and embedding-based
//!   indexers, JSON for structured consumers
//!
//! ## Module Organization
//!
//! - [`metadata`]: Global attribute extraction and variable inspection
//! - [`scan`]: Directory scanning and record aggregation
//! - [`format`]: Text and JSON rendering of extracted metadata
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use nc_meta_scan::prelude::*;
//! use std::path::Path;
//!
//! // Scan a directory tree for NetCDF files
//! let records = read_metadata_from_directory(Path::new("data"), true).unwrap();
//!
//! // Render each record for display or indexing
//! for record in &records {
//!     print!("{}", record_to_string(record));
//! }
//! ```
//!
//! The scan is single-threaded and synchronous: each file is opened, read,
//! and closed before the next one is touched.

// Core modules
pub mod errors;
pub mod format;
pub mod metadata;
pub mod scan;

// Direct re-exports for the public API
pub use errors::*;
pub use format::*;
pub use metadata::*;
pub use scan::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{NcMetaScanError, Result};
    pub use crate::format::{nested_to_string, record_to_json, record_to_string, MetaMap, MetaNode};
    pub use crate::metadata::{read_metadata, FileMetadata, GlobalAttributes};
    pub use crate::scan::{read_metadata_from_directory, MetadataRecord};
}
