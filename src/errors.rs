//! Centralized error handling for NcMetaScan
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! used throughout the codebase, enabling better error context and type safety.

use std::fmt;

/// Main error type for NcMetaScan operations
#[derive(Debug)]
pub enum NcMetaScanError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Directory traversal errors
    WalkError(walkdir::Error),

    /// Generic error for anything without a dedicated variant
    Generic(String),
}

impl fmt::Display for NcMetaScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NcMetaScanError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            NcMetaScanError::IoError(e) => write!(f, "I/O error: {}", e),
            NcMetaScanError::WalkError(e) => write!(f, "Directory walk error: {}", e),
            NcMetaScanError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for NcMetaScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NcMetaScanError::NetCDFError(e) => Some(e),
            NcMetaScanError::IoError(e) => Some(e),
            NcMetaScanError::WalkError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for NcMetaScanError {
    fn from(error: netcdf::Error) -> Self {
        NcMetaScanError::NetCDFError(error)
    }
}

impl From<std::io::Error> for NcMetaScanError {
    fn from(error: std::io::Error) -> Self {
        NcMetaScanError::IoError(error)
    }
}

impl From<walkdir::Error> for NcMetaScanError {
    fn from(error: walkdir::Error) -> Self {
        NcMetaScanError::WalkError(error)
    }
}

impl From<String> for NcMetaScanError {
    fn from(error: String) -> Self {
        NcMetaScanError::Generic(error)
    }
}

impl From<&str> for NcMetaScanError {
    fn from(error: &str) -> Self {
        NcMetaScanError::Generic(error.to_string())
    }
}

/// Result type alias for NcMetaScan operations
pub type Result<T> = std::result::Result<T, NcMetaScanError>;
