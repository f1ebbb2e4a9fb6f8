//! Renderable result views for the per-role results panel

use serde::Serialize;

use crate::floors::FloorLabels;
use crate::locations::LocationMatch;

pub const NO_RESULTS_MESSAGE: &str = "No locations found";

/// One clickable result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub id: String,
    pub label: String,
    pub floor: String,
    /// e.g. "First Floor"
    pub floor_label: String,
    pub category: String,
}

impl ResultRow {
    pub fn from_match(m: &LocationMatch, labels: &FloorLabels) -> Self {
        let record = &m.record;
        Self {
            id: record.id.clone(),
            label: record.display_label().to_string(),
            floor: record.floor.clone(),
            floor_label: labels.floor_caption(&record.floor),
            category: record.kind.clone(),
        }
    }

    /// Secondary line under the label: "First Floor • room"
    pub fn meta(&self) -> String {
        format!("{} • {}", self.floor_label, self.category)
    }
}

/// What the results panel should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultsView {
    /// Panel emptied after a selection
    Cleared,
    /// Search ran and found nothing
    Empty { message: &'static str },
    Results { rows: Vec<ResultRow> },
}

impl ResultsView {
    pub fn from_matches(matches: &[LocationMatch], labels: &FloorLabels) -> Self {
        if matches.is_empty() {
            return ResultsView::Empty {
                message: NO_RESULTS_MESSAGE,
            };
        }
        ResultsView::Results {
            rows: matches
                .iter()
                .map(|m| ResultRow::from_match(m, labels))
                .collect(),
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        match self {
            ResultsView::Results { rows } => rows,
            _ => &[],
        }
    }
}
