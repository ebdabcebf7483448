//! Defines command-line interface options using `clap` for the NcMetaScan application.

use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for harvesting NetCDF metadata
#[derive(Parser, Debug)]
#[command(
    version = "0.1.0",
    name = "NcMetaScan",
    about = "App for extracting global attribute metadata from NetCDF files"
)]
pub struct Args {
    /// Directory containing NetCDF files to scan
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Search recursively in subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Path to a single NetCDF file to inspect
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// List variables and dimensions of the inspected file
    #[arg(long, default_value_t = false)]
    pub list_vars: bool,

    /// Emit records as JSON instead of indented text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
