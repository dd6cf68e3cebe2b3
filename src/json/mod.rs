//! JSON serialization shared by every configuration object
//!
//! Layers, views, view states and the deck itself all expose an ordered map
//! of attributes through [`JsonNode`]. The deck's JSON document is built by
//! walking that tree, so each call reflects the current state.

pub mod finite;
pub mod naming;

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Value};

use crate::{core::config::JsonOptions, Error, Result};

/// Ordered attribute map, keyed by the names deck.gl expects.
pub type JsonMap = Map<String, Value>;

/// Uniform serialization contract of configuration objects.
pub trait JsonNode {
    /// Every public attribute under its external name; nulls omitted.
    fn to_mapping(&self) -> Result<JsonMap>;

    /// Pretty-printed JSON text with two-space indentation
    fn to_json(&self) -> Result<String> {
        self.to_json_with(&JsonOptions::default())
    }

    fn to_json_with(&self, options: &JsonOptions) -> Result<String> {
        encode(&Value::Object(self.to_mapping()?), options)
    }
}

/// Converts `value` for storage under `attribute`.
///
/// NaN and infinite floats are an error rather than `null`.
pub fn to_value<T: Serialize + ?Sized>(attribute: &str, value: &T) -> Result<Value> {
    let converted = serde_json::to_value(value)
        .and_then(|converted| finite::check(value).map(|()| converted));
    converted.map_err(|source| Error::Serialization {
        attribute: attribute.to_string(),
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Maps a sequence of nodes element-wise.
pub fn nodes_to_value<N: JsonNode>(nodes: &[N]) -> Result<Value> {
    nodes
        .iter()
        .map(|node| node.to_mapping().map(Value::Object))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Re-keys `attributes` under external names. When two keys share an
/// external name the later value wins.
pub fn normalize_keys(attributes: JsonMap) -> JsonMap {
    let mut normalized = JsonMap::with_capacity(attributes.len());
    for (key, value) in attributes {
        normalized.insert(naming::external_name(&key).into_owned(), value);
    }
    normalized
}

/// Copies `attributes` into `mapping` under external names, skipping nulls
/// and the keys in `reserved`.
pub fn extend_external(mapping: &mut JsonMap, attributes: &JsonMap, reserved: &[&str]) {
    for (key, value) in attributes {
        if value.is_null() || reserved.contains(&key.as_str()) {
            continue;
        }
        mapping.insert(naming::external_name(key).into_owned(), value.clone());
    }
}

/// Encodes `value` according to `options`.
pub fn encode(value: &Value, options: &JsonOptions) -> Result<String> {
    let sorted;
    let value = if options.sort_keys {
        sorted = sort_keys(value);
        &sorted
    } else {
        value
    };

    match options.indent {
        None => Ok(serde_json::to_string(value)?),
        Some(width) => {
            let indent = " ".repeat(width);
            let mut buffer = Vec::new();
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            value.serialize(&mut serializer)?;
            // serde_json only ever writes valid UTF-8
            Ok(String::from_utf8_lossy(&buffer).into_owned())
        }
    }
}

/// Rebuilds every object in `value` with its keys in lexicographic order.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Implements `serde::Serialize` by serializing [`JsonNode::to_mapping`].
#[macro_export]
macro_rules! impl_serialize_via_mapping {
    ($node:ty) => {
        impl serde::Serialize for $node {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mapping = $crate::json::JsonNode::to_mapping(self)
                    .map_err(<S::Error as serde::ser::Error>::custom)?;
                serde::Serialize::serialize(&mapping, serializer)
            }
        }
    };
}
