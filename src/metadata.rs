//! NetCDF metadata extraction
//!
//! This module reads the global attribute table of a NetCDF file and exposes
//! per-variable structure (dimensions, data type, attributes) for inspection.
//! Only global attributes ever end up in a scan record; variable structure is
//! deliberately kept out of it.

use crate::errors::Result;
use indexmap::IndexMap;
use netcdf::{AttributeValue, File};
use std::path::Path;

/// Global attribute table of a single file, in the order the file exposes them.
pub type GlobalAttributes = IndexMap<String, AttributeValue>;

/// Metadata extracted from one NetCDF file.
///
/// Carries the global attribute table and nothing else. Attribute values are
/// kept verbatim as [`netcdf::AttributeValue`]; numeric widths and signedness
/// are whatever the underlying library reports for the file.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub global_attributes: GlobalAttributes,
}

/// Structured metadata for a NetCDF variable
#[derive(Debug, Clone)]
pub struct VariableMetadata {
    pub name: String,
    pub data_type: String,
    pub dimensions: Vec<DimensionInfo>,
    pub attributes: IndexMap<String, AttributeValue>,
}

/// Information about a dimension
#[derive(Debug, Clone)]
pub struct DimensionInfo {
    pub name: String,
    pub length: usize,
    pub is_unlimited: bool,
}

impl VariableMetadata {
    /// Shape of the variable, one entry per dimension.
    pub fn shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(|d| d.length).collect()
    }
}

/// Reads the global attribute metadata of a NetCDF file.
///
/// The file is opened read-only and the handle is released on every exit
/// path. Returns every global attribute name mapped to its stored value,
/// nothing omitted and nothing synthesized.
pub fn read_metadata(path: &Path) -> Result<FileMetadata> {
    let file = netcdf::open(path)?;
    let mut global_attributes = GlobalAttributes::new();
    for attr in file.attributes() {
        global_attributes.insert(attr.name().to_string(), attr.value()?);
    }
    Ok(FileMetadata { global_attributes })
}

/// Collects structured metadata for every variable in a file.
pub fn variable_summaries(file: &File) -> Result<Vec<VariableMetadata>> {
    let mut summaries = Vec::new();

    for var in file.variables() {
        let data_type = format!("{:?}", var.vartype()).to_lowercase();

        let dimensions: Vec<DimensionInfo> = var
            .dimensions()
            .iter()
            .map(|d| DimensionInfo {
                name: d.name().to_string(),
                length: d.len(),
                is_unlimited: d.is_unlimited(),
            })
            .collect();

        let mut attributes = IndexMap::new();
        for attr in var.attributes() {
            attributes.insert(attr.name().to_string(), attr.value()?);
        }

        summaries.push(VariableMetadata {
            name: var.name().to_string(),
            data_type,
            dimensions,
            attributes,
        });
    }

    Ok(summaries)
}

/// Prints variables and dimensions in a clean, organized format.
pub fn print_variable_summaries(summaries: &[VariableMetadata]) {
    println!("\n Variables");
    println!("=============");

    if summaries.is_empty() {
        println!("   (No variables found)");
        return;
    }

    for var in summaries {
        let dims: Vec<&str> = var.dimensions.iter().map(|d| d.name.as_str()).collect();

        if dims.is_empty() {
            println!("    {} ({}): scalar", var.name, var.data_type);
        } else {
            let shape: Vec<String> = var.shape().iter().map(|s| s.to_string()).collect();
            println!(
                "    {} ({}): [{}] = ({})",
                var.name,
                var.data_type,
                dims.join(", "),
                shape.join(" x ")
            );
        }

        for dim in &var.dimensions {
            if dim.is_unlimited {
                println!("      {} is unlimited", dim.name);
            }
        }

        for (name, value) in &var.attributes {
            println!(
                "      - {}: {}",
                name,
                crate::format::attribute_to_string(value)
            );
        }
    }
}
