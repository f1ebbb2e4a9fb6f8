//! Cross-floor location search
//!
//! Plain substring matching over every floor at once. Ranking puts exact label
//! matches first, then walks the floors in building order.

use std::sync::Arc;

use crate::config::{Config, DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_RESULT_LIMIT};
use crate::floors::FloorOrder;

use super::types::{LocationMatch, LocationRecord};

/// Search settings: floor ordering, result cap and hidden categories.
#[derive(Clone, Debug)]
pub struct CrossFloorSearch {
    floor_order: FloorOrder,
    limit: usize,
    excluded_categories: Vec<String>,
}

impl Default for CrossFloorSearch {
    fn default() -> Self {
        Self {
            floor_order: FloorOrder::default(),
            limit: DEFAULT_RESULT_LIMIT,
            excluded_categories: DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl CrossFloorSearch {
    pub fn new(floor_order: FloorOrder) -> Self {
        Self {
            floor_order,
            ..Default::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            floor_order: config.get_floor_order(),
            limit: config.get_result_limit(),
            excluded_categories: config.get_excluded_categories(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn floor_order(&self) -> &FloorOrder {
        &self.floor_order
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn is_excluded(&self, record: &LocationRecord) -> bool {
        let kind = record.kind.to_lowercase();
        self.excluded_categories.iter().any(|c| *c == kind)
    }

    /// Find records on any floor whose label contains `query`.
    ///
    /// An absent or empty query, or an absent record set, yields no results.
    /// A whitespace-only query trims to "" and so matches every searchable record.
    pub fn search(
        &self,
        query: Option<&str>,
        records: Option<&[Arc<LocationRecord>]>,
    ) -> Vec<LocationMatch> {
        let (query, records) = match (query, records) {
            (Some(q), Some(r)) if !q.is_empty() => (q, r),
            _ => return Vec::new(),
        };

        let query_lower = query.trim().to_lowercase();

        let mut matches: Vec<LocationMatch> = records
            .iter()
            .filter(|record| !self.is_excluded(record))
            .filter_map(|record| {
                let label = record.display_label().to_lowercase();
                if !label.contains(&query_lower) {
                    return None;
                }
                Some(LocationMatch {
                    record: Arc::clone(record),
                    exact: label == query_lower,
                    floor_rank: self.floor_order.position(&record.floor),
                })
            })
            .collect();

        // Stable: equal keys keep registry order
        matches.sort_by_key(|m| (!m.exact, m.floor_rank));
        matches.truncate(self.limit);
        matches
    }
}
