use nc_meta_scan::format::{record_to_json, record_to_string};
use nc_meta_scan::scan::read_metadata_from_directory;
use netcdf::create;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_scan_and_render_integration() {
    // Build a small directory tree:
    //   root/surface.nc       (valid, two global attributes)
    //   root/broken.nc        (garbage bytes)
    //   root/deep/profile.nc  (valid, one global attribute)
    //   root/readme.txt       (ignored)
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let deep = temp_dir.path().join("deep");
    fs::create_dir(&deep).expect("Failed to create subdirectory");

    {
        let mut file =
            create(temp_dir.path().join("surface.nc")).expect("Failed to create NetCDF file");
        file.add_attribute("title", "Surface Samples")
            .expect("Failed to add attribute");
        file.add_attribute("station_count", 12i32)
            .expect("Failed to add attribute");
    }
    {
        let mut file = create(deep.join("profile.nc")).expect("Failed to create NetCDF file");
        file.add_attribute("title", "Depth Profiles")
            .expect("Failed to add attribute");
    }
    fs::write(temp_dir.path().join("broken.nc"), b"not a netcdf header")
        .expect("Failed to write garbage file");
    fs::write(temp_dir.path().join("readme.txt"), "ignored").expect("Failed to write readme");

    // Non-recursive scan sees only the top-level .nc files.
    let flat =
        read_metadata_from_directory(temp_dir.path(), false).expect("Flat scan should succeed");
    let flat_names: HashSet<&str> = flat.iter().map(|r| r.fname.as_str()).collect();
    assert_eq!(flat_names, ["surface.nc", "broken.nc"].into());

    // Recursive scan also picks up the nested file.
    let deep_records =
        read_metadata_from_directory(temp_dir.path(), true).expect("Recursive scan should succeed");
    let deep_names: HashSet<&str> = deep_records.iter().map(|r| r.fname.as_str()).collect();
    assert_eq!(
        deep_names,
        ["surface.nc", "broken.nc", "profile.nc"].into()
    );

    // The garbage file is absorbed as a null-valued record, not an error.
    let broken = deep_records
        .iter()
        .find(|r| r.fname == "broken.nc")
        .unwrap();
    assert!(broken.value.is_none());
    assert_eq!(
        record_to_string(broken),
        "fname: broken.nc\nvalue: null\n"
    );

    // Valid records render their global attributes as indented text.
    let surface = deep_records
        .iter()
        .find(|r| r.fname == "surface.nc")
        .unwrap();
    let text = record_to_string(surface);
    assert!(text.starts_with("fname: surface.nc\nvalue: \n  global_attributes: \n"));
    assert!(text.contains("    title: Surface Samples\n"));
    assert!(text.contains("    station_count: 12\n"));

    // And as JSON for structured consumers.
    let json = record_to_json(surface);
    assert_eq!(json["fname"], "surface.nc");
    assert_eq!(
        json["value"]["global_attributes"]["title"],
        "Surface Samples"
    );
    assert_eq!(json["value"]["global_attributes"]["station_count"], 12);

    println!("Integration test passed: scan, absorb, and render all work end to end");
}
