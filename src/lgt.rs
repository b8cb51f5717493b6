//! Editing EAGLE logical graph templates before they are unrolled.
//!
//! The number of channels of an observation maps onto the number of copies of the
//! graph's Scatter constructs. Only that part of the LGT is interpreted here; the rest of
//! the document is passed through untouched.

use crate::error::LgtError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const SCATTER_CATEGORY: &str = "Scatter";
const COPIES_FIELD: &str = "num_of_copies";

/// Sets the copy count of every Scatter node in `lgt` to `channels`.
///
/// Returns how many Scatter nodes were updated.
pub fn set_channels(lgt: &mut Value, channels: u32) -> Result<usize, LgtError> {
    if channels == 0 {
        return Err(LgtError::ZeroChannels);
    }
    let nodes = lgt
        .get_mut("nodeDataArray")
        .and_then(Value::as_array_mut)
        .ok_or(LgtError::MissingNodeDataArray)?;

    let mut updated = 0;
    for node in nodes.iter_mut() {
        if node.get("category").and_then(Value::as_str) != Some(SCATTER_CATEGORY) {
            continue;
        }
        let Some(object) = node.as_object_mut() else {
            continue;
        };
        object.insert("copies".to_string(), Value::from(channels));

        if let Some(fields) = object.get_mut("fields").and_then(Value::as_array_mut) {
            for field in fields.iter_mut() {
                if field.get("name").and_then(Value::as_str) != Some(COPIES_FIELD) {
                    continue;
                }
                if let Some(field) = field.as_object_mut() {
                    // EAGLE stores some field values as strings; keep whichever form it used.
                    let value = match field.get("value") {
                        Some(Value::String(_)) => Value::from(channels.to_string()),
                        _ => Value::from(channels),
                    };
                    field.insert("value".to_string(), value);
                }
            }
        }
        updated += 1;
    }

    if updated == 0 {
        return Err(LgtError::NoScatter);
    }
    log::info!(
        "Set {} channel(s) on {} Scatter construct(s)",
        channels,
        updated
    );
    Ok(updated)
}

/// Reads the LGT at `input`, sets its channel count and writes the result to `output`.
pub fn write_lgt_with_channels(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    channels: u32,
) -> Result<PathBuf, LgtError> {
    let input = input.as_ref();
    let output = output.as_ref();
    let content = fs::read_to_string(input).map_err(|source| LgtError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let mut lgt: Value = serde_json::from_str(&content)?;
    set_channels(&mut lgt, channels)?;

    let json = serde_json::to_string_pretty(&lgt)?;
    fs::write(output, json).map_err(|source| LgtError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(output.to_path_buf())
}

/// Updates the channel count of the LGT at `lgt_path` in place.
pub fn update_number_of_channels(
    lgt_path: impl AsRef<Path>,
    channels: u32,
) -> Result<PathBuf, LgtError> {
    let lgt_path = lgt_path.as_ref();
    write_lgt_with_channels(lgt_path, lgt_path, channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_scatter_nodes_change() {
        let mut lgt = json!({
            "nodeDataArray": [
                {"key": -1, "category": "Scatter", "copies": 1,
                 "fields": [{"name": "num_of_copies", "value": "1"}, {"name": "other", "value": 3}]},
                {"key": -2, "category": "PythonApp", "copies": 1},
                {"key": -3, "category": "Scatter", "fields": [{"name": "num_of_copies", "value": 4}]}
            ],
            "linkDataArray": []
        });

        assert_eq!(set_channels(&mut lgt, 8).unwrap(), 2);
        let nodes = lgt["nodeDataArray"].as_array().unwrap();
        assert_eq!(nodes[0]["copies"], 8);
        assert_eq!(nodes[0]["fields"][0]["value"], "8");
        assert_eq!(nodes[0]["fields"][1]["value"], 3);
        assert_eq!(nodes[1]["copies"], 1);
        assert_eq!(nodes[2]["copies"], 8);
        assert_eq!(nodes[2]["fields"][0]["value"], 8);
    }

    #[test]
    fn test_rejects_graphs_without_scatter() {
        let mut lgt = json!({"nodeDataArray": [{"category": "Data"}]});
        assert!(matches!(set_channels(&mut lgt, 2), Err(LgtError::NoScatter)));

        let mut not_lgt = json!({"nodes": []});
        assert!(matches!(
            set_channels(&mut not_lgt, 2),
            Err(LgtError::MissingNodeDataArray)
        ));
        assert!(matches!(set_channels(&mut lgt, 0), Err(LgtError::ZeroChannels)));
    }
}
