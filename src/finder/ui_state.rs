//! Desired visual state of the all-floors toggle button.
//!
//! Pure derivation from the session state; hosts apply it however they render.

use serde::Serialize;

use super::session::SessionState;

/// Label shown on the toggle in both states
pub const TOGGLE_LABEL: &str = "🔍 All Floors";

const ACTIVE_TITLE: &str = "Searching all floors";
const INACTIVE_TITLE: &str = "Search all floors";

const ACTIVE_CLASSES: &[&str] = &["bg-gold", "text-white"];
const INACTIVE_CLASSES: &[&str] = &["border", "text-slate-600"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVisual {
    pub active: bool,
    pub label: &'static str,
    pub title: &'static str,
    pub add_classes: &'static [&'static str],
    pub remove_classes: &'static [&'static str],
}

impl ToggleVisual {
    pub fn for_state(state: SessionState) -> Self {
        if state.is_active() {
            ToggleVisual {
                active: true,
                label: TOGGLE_LABEL,
                title: ACTIVE_TITLE,
                add_classes: ACTIVE_CLASSES,
                remove_classes: INACTIVE_CLASSES,
            }
        } else {
            ToggleVisual {
                active: false,
                label: TOGGLE_LABEL,
                title: INACTIVE_TITLE,
                add_classes: INACTIVE_CLASSES,
                remove_classes: ACTIVE_CLASSES,
            }
        }
    }

    /// Apply to a class list: removes then adds, so the result only depends on `self`.
    pub fn apply_to_classes(&self, classes: &mut Vec<String>) {
        classes.retain(|c| !self.remove_classes.contains(&c.as_str()));
        for class in self.add_classes {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }
}
