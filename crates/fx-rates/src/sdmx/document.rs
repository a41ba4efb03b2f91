//! Typed view of an SDMX-JSON data message.
//!
//! Every level is optional: the decoder checks presence explicitly and
//! reports which part is missing instead of failing inside serde.

use serde::{Deserialize, Serialize};

use super::ordered_map::OrderedMap;

/// Root of an SDMX-JSON data message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SdmxDocument {
    /// Message metadata (id, prepared, sender); carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,

    #[serde(rename = "dataSets", default, skip_serializing_if = "Option::is_none")]
    pub data_sets: Option<Vec<DataSet>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// Series-level and observation-level dimension declarations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Dimensions fixed per series; their order defines the series key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Dimension>>,

    /// Dimensions that vary within a series (the time axis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<Vec<Dimension>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Coded values; a key segment is an index into this list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<DimensionValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Composite key ("0:3:0:0:0") -> series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<OrderedMap<Series>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Time index ("0", "1", ...) -> `[value, attribute...]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<OrderedMap<Option<Vec<serde_json::Value>>>>,
}

impl Dimension {
    pub fn new(id: impl Into<String>, value_ids: &[&str]) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
            values: Some(value_ids.iter().map(|v| DimensionValue::new(*v)).collect()),
        }
    }
}

impl DimensionValue {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }
}
