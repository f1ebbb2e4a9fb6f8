//! Collaborators the floor finder drives on the host page.
//!
//! The locator never touches presentation directly. It talks to these traits,
//! and `MemoryHost` is the in-process implementation used by the CLI session
//! driver and by tests.

use std::collections::HashMap;

use serde::Serialize;

use super::render::ResultsView;
use super::session::Role;
use super::ui_state::ToggleVisual;

/// Which floor the map is showing, and how to change it
pub trait FloorDisplay {
    fn current_floor(&self) -> Option<String>;
    /// Request a floor switch; the host runs its own rendering pipeline
    fn set_floor(&mut self, floor: &str);
}

/// The text input bound to each role
pub trait InputBinding {
    fn input_text(&self, role: Role) -> String;
    /// Show `label` in the input and remember `id` for route computation
    fn set_selection(&mut self, role: Role, label: &str, id: &str);
}

/// Write-only sink for the per-role results panel
pub trait ResultsPanel {
    fn render_results(&mut self, role: Role, view: ResultsView);
}

/// The per-role all-floors toggle button
pub trait ToggleControl {
    fn apply_toggle_visual(&mut self, role: Role, visual: ToggleVisual);
}

/// Everything the locator needs from its host
pub trait FinderHost: FloorDisplay + InputBinding + ResultsPanel + ToggleControl {}

impl<T> FinderHost for T where T: FloorDisplay + InputBinding + ResultsPanel + ToggleControl {}

/// Something the host was asked to do, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    #[serde(rename_all = "camelCase")]
    FloorChange {
        from: Option<String>,
        to: String,
    },
    #[serde(rename_all = "camelCase")]
    InputSet {
        role: Role,
        text: String,
        node_id: Option<String>,
    },
    Render {
        role: Role,
        view: ResultsView,
    },
    Toggle {
        role: Role,
        visual: ToggleVisual,
    },
}

#[derive(Debug, Clone, Default)]
struct InputState {
    text: String,
    node_id: Option<String>,
}

/// In-memory host: keeps the latest state per role plus a log of events.
#[derive(Debug, Default)]
pub struct MemoryHost {
    current_floor: Option<String>,
    inputs: HashMap<Role, InputState>,
    panels: HashMap<Role, ResultsView>,
    toggles: HashMap<Role, ToggleVisual>,
    events: Vec<HostEvent>,
}

impl MemoryHost {
    pub fn new(current_floor: Option<&str>) -> Self {
        Self {
            current_floor: current_floor.map(str::to_string),
            ..Default::default()
        }
    }

    /// Simulate the user typing; clears any previously selected id.
    pub fn type_text(&mut self, role: Role, text: &str) {
        let input = self.inputs.entry(role).or_default();
        input.text = text.to_string();
        input.node_id = None;
    }

    pub fn selected_id(&self, role: Role) -> Option<&str> {
        self.inputs.get(&role).and_then(|i| i.node_id.as_deref())
    }

    pub fn panel(&self, role: Role) -> Option<&ResultsView> {
        self.panels.get(&role)
    }

    pub fn toggle_visual(&self, role: Role) -> Option<&ToggleVisual> {
        self.toggles.get(&role)
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn floor_changes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::FloorChange { to, .. } => Some(to.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl FloorDisplay for MemoryHost {
    fn current_floor(&self) -> Option<String> {
        self.current_floor.clone()
    }

    fn set_floor(&mut self, floor: &str) {
        let from = self.current_floor.replace(floor.to_string());
        self.events.push(HostEvent::FloorChange {
            from,
            to: floor.to_string(),
        });
    }
}

impl InputBinding for MemoryHost {
    fn input_text(&self, role: Role) -> String {
        self.inputs
            .get(&role)
            .map(|i| i.text.clone())
            .unwrap_or_default()
    }

    fn set_selection(&mut self, role: Role, label: &str, id: &str) {
        let input = self.inputs.entry(role).or_default();
        input.text = label.to_string();
        input.node_id = Some(id.to_string());
        self.events.push(HostEvent::InputSet {
            role,
            text: label.to_string(),
            node_id: Some(id.to_string()),
        });
    }
}

impl ResultsPanel for MemoryHost {
    fn render_results(&mut self, role: Role, view: ResultsView) {
        self.panels.insert(role, view.clone());
        self.events.push(HostEvent::Render { role, view });
    }
}

impl ToggleControl for MemoryHost {
    fn apply_toggle_visual(&mut self, role: Role, visual: ToggleVisual) {
        self.toggles.insert(role, visual.clone());
        self.events.push(HostEvent::Toggle { role, visual });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::session::SessionState;

    #[test]
    fn test_type_text_clears_selected_id() {
        let mut host = MemoryHost::new(Some("G"));
        host.set_selection(Role::Start, "Library", "r1");
        assert_eq!(host.selected_id(Role::Start), Some("r1"));

        host.type_text(Role::Start, "lib");
        assert_eq!(host.input_text(Role::Start), "lib");
        assert_eq!(host.selected_id(Role::Start), None);
    }

    #[test]
    fn test_set_floor_records_transition() {
        let mut host = MemoryHost::new(Some("G"));
        host.set_floor("2");
        assert_eq!(host.current_floor().as_deref(), Some("2"));
        assert_eq!(
            host.events(),
            &[HostEvent::FloorChange {
                from: Some("G".to_string()),
                to: "2".to_string()
            }]
        );
    }

    #[test]
    fn test_drain_events_empties_log() {
        let mut host = MemoryHost::new(None);
        host.apply_toggle_visual(Role::End, ToggleVisual::for_state(SessionState::Active));
        assert_eq!(host.drain_events().len(), 1);
        assert!(host.events().is_empty());
        assert!(host.toggle_visual(Role::End).is_some_and(|v| v.active));
    }

    #[test]
    fn test_event_json_shape() {
        let event = HostEvent::InputSet {
            role: Role::Start,
            text: "Library".to_string(),
            node_id: Some("r1".to_string()),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "inputSet");
        assert_eq!(json["role"], "start");
        assert_eq!(json["nodeId"], "r1");
    }
}
