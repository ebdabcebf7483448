//! Rendering of extracted metadata
//!
//! Two output shapes: an indented plain-text form suitable for terminals,
//! logs, and text-embedding indexers, and a JSON form for structured
//! consumers. Plain-text rendering works on a small nested-map tree so that
//! records, attribute tables, and ad-hoc maps all print the same way.

use crate::metadata::{FileMetadata, VariableMetadata};
use crate::scan::MetadataRecord;
use indexmap::IndexMap;
use netcdf::AttributeValue;
use serde_json::{json, Value as JsonValue};

/// Width of the separator line printed between records.
pub const SEPARATOR_LENGTH: usize = 80;

/// Number of spaces added per nesting level.
const INDENT_STEP: usize = 2;

/// Separator line for terminal output.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_LENGTH)
}

/// A node in the renderable metadata tree.
#[derive(Debug, Clone)]
pub enum MetaNode {
    /// Nested mapping, rendered recursively with increased indent
    Map(MetaMap),
    /// Attribute leaf, rendered via its default textual form
    Value(AttributeValue),
    /// Absent value (failed extraction), rendered as `null`
    Null,
}

/// An insertion-ordered mapping of keys to tree nodes.
pub type MetaMap = IndexMap<String, MetaNode>;

/// Renders a nested mapping as an indented string.
///
/// Each key renders on its own line prefixed by `indent` spaces and followed
/// by `: `. Map values recurse with the indent increased by two; every other
/// node appends its textual form. An empty mapping renders as an empty
/// string. Output order is the mapping's insertion order.
pub fn nested_to_string(map: &MetaMap, indent: usize) -> String {
    let mut result = String::new();
    for (key, node) in map {
        result.push_str(&" ".repeat(indent));
        result.push_str(key);
        result.push_str(": ");
        match node {
            MetaNode::Map(inner) => {
                result.push('\n');
                result.push_str(&nested_to_string(inner, indent + INDENT_STEP));
            }
            MetaNode::Value(value) => {
                result.push_str(&attribute_to_string(value));
                result.push('\n');
            }
            MetaNode::Null => {
                result.push_str("null");
                result.push('\n');
            }
        }
    }
    result
}

/// Default textual form of an attribute value.
///
/// Strings render bare, scalars via their display form, and sequences via
/// their debug form (`[1, 2, 3]`). No normalization is applied.
pub fn attribute_to_string(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Str(s) => s.clone(),
        AttributeValue::Strs(ss) => format!("{:?}", ss),
        AttributeValue::Float(f) => f.to_string(),
        AttributeValue::Floats(fs) => format!("{:?}", fs),
        AttributeValue::Double(d) => d.to_string(),
        AttributeValue::Doubles(ds) => format!("{:?}", ds),
        AttributeValue::Int(i) => i.to_string(),
        AttributeValue::Ints(is) => format!("{:?}", is),
        AttributeValue::Short(s) => s.to_string(),
        AttributeValue::Shorts(ss) => format!("{:?}", ss),
        AttributeValue::Uchar(u) => u.to_string(),
        AttributeValue::Uchars(us) => format!("{:?}", us),
        AttributeValue::Ushort(u) => u.to_string(),
        AttributeValue::Ushorts(us) => format!("{:?}", us),
        AttributeValue::Uint(u) => u.to_string(),
        AttributeValue::Uints(us) => format!("{:?}", us),
        other => format!("{:?}", other),
    }
}

/// Builds the renderable tree for one file's metadata.
pub fn metadata_to_tree(metadata: &FileMetadata) -> MetaMap {
    let mut attrs = MetaMap::new();
    for (name, value) in &metadata.global_attributes {
        attrs.insert(name.clone(), MetaNode::Value(value.clone()));
    }

    let mut tree = MetaMap::new();
    tree.insert("global_attributes".to_string(), MetaNode::Map(attrs));
    tree
}

/// Renders a scan record as indented text.
///
/// A failed extraction renders its value as `null`; the record still appears.
pub fn record_to_string(record: &MetadataRecord) -> String {
    let mut tree = MetaMap::new();
    tree.insert(
        "fname".to_string(),
        MetaNode::Value(AttributeValue::Str(record.fname.clone())),
    );
    match &record.value {
        Some(metadata) => {
            tree.insert(
                "value".to_string(),
                MetaNode::Map(metadata_to_tree(metadata)),
            );
        }
        None => {
            tree.insert("value".to_string(), MetaNode::Null);
        }
    }
    nested_to_string(&tree, 0)
}

/// Converts a scan record to a JSON value for structured consumers.
pub fn record_to_json(record: &MetadataRecord) -> JsonValue {
    let value = match &record.value {
        Some(metadata) => {
            let attrs: serde_json::Map<String, JsonValue> = metadata
                .global_attributes
                .iter()
                .map(|(name, value)| (name.clone(), attribute_to_json(value)))
                .collect();
            json!({ "global_attributes": attrs })
        }
        None => JsonValue::Null,
    };
    json!({ "fname": record.fname, "value": value })
}

/// Converts a variable summary to a JSON value.
pub fn variable_to_json(var: &VariableMetadata) -> JsonValue {
    let attrs: serde_json::Map<String, JsonValue> = var
        .attributes
        .iter()
        .map(|(name, value)| (name.clone(), attribute_to_json(value)))
        .collect();
    let dimensions: Vec<JsonValue> = var
        .dimensions
        .iter()
        .map(|d| {
            json!({
                "name": d.name,
                "length": d.length,
                "is_unlimited": d.is_unlimited,
            })
        })
        .collect();
    json!({
        "name": var.name,
        "data_type": var.data_type,
        "dimensions": dimensions,
        "shape": var.shape(),
        "attributes": attrs,
    })
}

/// Converts an attribute value to the corresponding JSON scalar or array.
pub fn attribute_to_json(value: &AttributeValue) -> JsonValue {
    match value {
        AttributeValue::Str(s) => json!(s),
        AttributeValue::Strs(ss) => json!(ss),
        AttributeValue::Float(f) => json!(f),
        AttributeValue::Floats(fs) => json!(fs),
        AttributeValue::Double(d) => json!(d),
        AttributeValue::Doubles(ds) => json!(ds),
        AttributeValue::Int(i) => json!(i),
        AttributeValue::Ints(is) => json!(is),
        AttributeValue::Short(s) => json!(s),
        AttributeValue::Shorts(ss) => json!(ss),
        AttributeValue::Uchar(u) => json!(u),
        AttributeValue::Uchars(us) => json!(us),
        AttributeValue::Ushort(u) => json!(u),
        AttributeValue::Ushorts(us) => json!(us),
        AttributeValue::Uint(u) => json!(u),
        AttributeValue::Uints(us) => json!(us),
        other => json!(format!("{:?}", other)),
    }
}
