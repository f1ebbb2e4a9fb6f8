//! Location record and registry types

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named place on one floor of the building (room, office, corridor, ...).
///
/// Extra fields in the source data (coordinates, etc.) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category, e.g. "room" or "corridor"
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    /// Floor identifier, e.g. "G" or "2"
    #[serde(default, deserialize_with = "lenient_text")]
    pub floor: String,
}

/// Node tables are loosely typed: `null` reads as "" and numbers (`"floor": 1`)
/// read as their decimal text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl LocationRecord {
    pub fn new(
        id: impl Into<String>,
        name: Option<&str>,
        kind: impl Into<String>,
        floor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            kind: kind.into(),
            floor: floor.into(),
        }
    }

    /// Text shown for this record: the name, or the id when the name is unset or empty.
    pub fn display_label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Read-only set of location records shared with the host.
#[derive(Clone, Debug, Default)]
pub struct LocationRegistry {
    records: Vec<Arc<LocationRecord>>,
}

impl LocationRegistry {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn records(&self) -> &[Arc<LocationRecord>] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&Arc<LocationRecord>> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records per floor identifier
    pub fn floor_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.floor.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One search hit, with the ranking keys it was sorted by.
#[derive(Clone, Debug)]
pub struct LocationMatch {
    pub record: Arc<LocationRecord>,
    /// Folded label equals the folded query
    pub exact: bool,
    /// Position in the floor order, -1 when the floor is unknown
    pub floor_rank: i64,
}
