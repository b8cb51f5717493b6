//! Tests for editing the channel count of EAGLE logical graph templates on disk.
mod common;
use common::*;
use std::fs;
use topsim_pipelines::lgt::write_lgt_with_channels;
use topsim_pipelines::prelude::*;

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_update_channels_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let lgt = dir.path().join("eagle_lgt.graph");
    fs::write(&lgt, SCATTER_LGT_JSON).unwrap();

    update_number_of_channels(&lgt, 16).unwrap();

    let updated = read_json(&lgt);
    assert_eq!(updated["nodeDataArray"][0]["copies"], 16);
    assert_eq!(updated["nodeDataArray"][0]["fields"][0]["value"], 16);
    assert_eq!(updated["nodeDataArray"][1].get("copies"), None);
    // Untouched sections survive.
    assert_eq!(updated["modelData"]["repoService"], "GitHub");
}

#[test]
fn test_write_adjusted_copy() {
    let dir = tempfile::tempdir().unwrap();
    let lgt = dir.path().join("eagle_lgt.graph");
    let copy = dir.path().join("eagle_lgt_8ch.graph");
    fs::write(&lgt, SCATTER_LGT_JSON).unwrap();

    write_lgt_with_channels(&lgt, &copy, 8).unwrap();

    assert_eq!(read_json(&copy)["nodeDataArray"][0]["copies"], 8);
    assert_eq!(read_json(&lgt)["nodeDataArray"][0]["copies"], 1);
}

#[test]
fn test_missing_lgt_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = update_number_of_channels(dir.path().join("nope.graph"), 2).unwrap_err();
    assert!(matches!(err, LgtError::Io { .. }));
    assert!(err.to_string().contains("nope.graph"));
}
