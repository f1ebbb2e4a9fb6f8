//! Floor identifiers: ordering and display labels.
//!
//! Floors are short codes ("G", "1", "2", ...). The ordering is only used as a
//! ranking tie-break; the labels are presentation only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FLOOR_LABELS, DEFAULT_FLOOR_ORDER};

/// Ordered list of floor identifiers, lowest level first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorOrder(Vec<String>);

impl FloorOrder {
    pub fn new<I, S>(floors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FloorOrder(floors.into_iter().map(Into::into).collect())
    }

    /// Position of `floor` in the ordering, or -1 when the floor is unknown.
    ///
    /// Unknown floors therefore rank ahead of every known floor.
    pub fn position(&self, floor: &str) -> i64 {
        self.0
            .iter()
            .position(|f| f == floor)
            .map(|idx| idx as i64)
            .unwrap_or(-1)
    }

    pub fn contains(&self, floor: &str) -> bool {
        self.0.iter().any(|f| f == floor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FloorOrder {
    fn default() -> Self {
        FloorOrder::new(DEFAULT_FLOOR_ORDER.iter().copied())
    }
}

/// Human-readable names for floor identifiers ("G" -> "Ground").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorLabels(HashMap<String, String>);

impl FloorLabels {
    pub fn new(labels: HashMap<String, String>) -> Self {
        FloorLabels(labels)
    }

    /// Label for a floor, or the identifier itself when none is configured.
    pub fn label(&self, floor: &str) -> String {
        self.0
            .get(floor)
            .cloned()
            .unwrap_or_else(|| floor.to_string())
    }

    /// Label as shown on a result row, e.g. "First Floor".
    pub fn floor_caption(&self, floor: &str) -> String {
        format!("{} Floor", self.label(floor))
    }
}

impl Default for FloorLabels {
    fn default() -> Self {
        FloorLabels(
            DEFAULT_FLOOR_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
