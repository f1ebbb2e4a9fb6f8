//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::defaults::*;
use crate::floors::{FloorLabels, FloorOrder};

/// User configuration, read from `~/.floor-finder/config.json`.
///
/// Every field is optional; the `get_*` accessors apply defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Floor identifiers from lowest to highest (default: G, 1, 2, 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_order: Option<Vec<String>>,
    /// Display names per floor identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_labels: Option<HashMap<String, String>>,
    /// Maximum results per search (default: 25)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_limit: Option<usize>,
    /// Categories hidden from search (default: ["corridor"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_categories: Option<Vec<String>>,
    /// Location registry JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_path: Option<String>,
}

impl Config {
    pub fn get_floor_order(&self) -> FloorOrder {
        match &self.floor_order {
            Some(floors) => FloorOrder::new(floors.iter().cloned()),
            None => FloorOrder::default(),
        }
    }

    /// Configured labels are merged over the defaults.
    pub fn get_floor_labels(&self) -> FloorLabels {
        let mut labels: HashMap<String, String> = DEFAULT_FLOOR_LABELS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if let Some(custom) = &self.floor_labels {
            labels.extend(custom.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        FloorLabels::new(labels)
    }

    pub fn get_result_limit(&self) -> usize {
        self.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT)
    }

    /// Lowercased so category checks can compare against folded values.
    pub fn get_excluded_categories(&self) -> Vec<String> {
        match &self.excluded_categories {
            Some(categories) => categories.iter().map(|c| c.to_lowercase()).collect(),
            None => DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    pub fn get_records_path(&self) -> Option<PathBuf> {
        self.records_path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}
