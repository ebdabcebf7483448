//! Entry point for the NcMetaScan application.
//! Handles CLI parsing and dispatches directory scans or single-file inspection.

use chrono::Utc;
use clap::Parser;
use serde_json::Value as JsonValue;
use std::error::Error;

mod cli;

use cli::Args;
use nc_meta_scan::format::{
    metadata_to_tree, nested_to_string, record_to_json, record_to_string, separator,
    variable_to_json,
};
use nc_meta_scan::metadata::{print_variable_summaries, read_metadata, variable_summaries};
use nc_meta_scan::scan::{read_metadata_from_directory, MetadataRecord};

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    if !args.json {
        println!("{}", separator());
        println!("        NcMetaScan - Rust-based NetCDF metadata harvester");
        println!("{}", separator());
    }

    if let Some(file_path) = &args.file {
        // Single-file inspection: a bad path here is fatal, unlike in a scan.
        let metadata = read_metadata(file_path)?;

        if args.json {
            let record = MetadataRecord {
                fname: file_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                value: Some(metadata),
            };
            // Everything requested goes into the one JSON document so stdout
            // stays machine-parseable as a whole.
            let mut doc = record_to_json(&record);
            if args.list_vars {
                let file = netcdf::open(file_path)?;
                let summaries = variable_summaries(&file)?;
                doc["variables"] =
                    JsonValue::Array(summaries.iter().map(variable_to_json).collect());
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            println!("Successfully opened NetCDF file: {}", file_path.display());
            print!("{}", nested_to_string(&metadata_to_tree(&metadata), 0));

            if args.list_vars {
                let file = netcdf::open(file_path)?;
                let summaries = variable_summaries(&file)?;
                print_variable_summaries(&summaries);
            }
        }
    } else if let Some(dir) = &args.dir {
        if args.verbose {
            println!(
                "Scanning {} ({})",
                dir.display(),
                if args.recursive {
                    "recursive"
                } else {
                    "non-recursive"
                }
            );
        }

        let records = read_metadata_from_directory(dir, args.recursive)?;

        if args.json {
            let out: Vec<JsonValue> = records.iter().map(record_to_json).collect();
            println!("{}", serde_json::to_string_pretty(&JsonValue::Array(out))?);
        } else {
            for record in &records {
                println!("{}", separator());
                print!("{}", record_to_string(record));
            }
            println!("{}", separator());
            println!(
                "Scanned {} NetCDF file(s) at {}",
                records.len(),
                Utc::now().to_rfc3339()
            );
        }
    } else {
        return Err("Provide --file <PATH> or --dir <PATH>".into());
    }

    Ok(())
}
