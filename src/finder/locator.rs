//! Cross-floor locator: the toggle / type / select flow for one page.
//!
//! State lives in `FinderSessions`, which the caller owns and passes in. Every
//! session change goes through `refresh_toggle`, so a session and its button
//! never disagree.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::config::Config;
use crate::floors::FloorLabels;
use crate::locations::{CrossFloorSearch, LocationMatch, LocationRecord, LocationRegistry};
use crate::logging;

use super::host::FinderHost;
use super::render::ResultsView;
use super::session::{FinderSessions, Role};
use super::ui_state::ToggleVisual;

pub struct CrossFloorLocator {
    search: CrossFloorSearch,
    labels: FloorLabels,
    registry: Option<Arc<LocationRegistry>>,
}

impl CrossFloorLocator {
    pub fn new(
        search: CrossFloorSearch,
        labels: FloorLabels,
        registry: Option<Arc<LocationRegistry>>,
    ) -> Self {
        Self {
            search,
            labels,
            registry,
        }
    }

    pub fn from_config(config: &Config, registry: Option<Arc<LocationRegistry>>) -> Self {
        Self::new(
            CrossFloorSearch::from_config(config),
            config.get_floor_labels(),
            registry,
        )
    }

    pub fn registry(&self) -> Option<&LocationRegistry> {
        self.registry.as_deref()
    }

    pub fn labels(&self) -> &FloorLabels {
        &self.labels
    }

    /// Matches for `query` across every floor
    pub fn search(&self, query: Option<&str>) -> Vec<LocationMatch> {
        self.search
            .search(query, self.registry.as_deref().map(|r| r.records()))
    }

    /// Flip all-floors mode for `role`. When switching on with text already
    /// in the input, search immediately.
    pub fn toggle(&self, sessions: &mut FinderSessions, role: Role, host: &mut impl FinderHost) {
        sessions.get_mut(role).toggle();
        self.refresh_toggle(sessions, role, host);

        if sessions.is_active(role) {
            let text = host.input_text(role);
            if !text.is_empty() {
                self.run_and_render(role, &text, host);
            }
        }
    }

    /// Re-run the search on each keystroke while `role` is in all-floors mode.
    /// While inactive the host's own single-floor search handles input.
    pub fn on_input_changed(
        &self,
        sessions: &FinderSessions,
        role: Role,
        text: &str,
        host: &mut impl FinderHost,
    ) {
        if !sessions.is_active(role) {
            return;
        }
        self.run_and_render(role, text, host);
    }

    /// Commit a result: fill the input, jump to the record's floor, close the panel
    /// and leave all-floors mode.
    pub fn select_result(
        &self,
        sessions: &mut FinderSessions,
        role: Role,
        record: &LocationRecord,
        host: &mut impl FinderHost,
    ) {
        host.set_selection(role, record.display_label(), &record.id);

        if host.current_floor().as_deref() != Some(record.floor.as_str()) {
            logging::log_ui_event("floor", "change", Some(&record.floor));
            host.set_floor(&record.floor);
        }

        host.render_results(role, ResultsView::Cleared);
        sessions.get_mut(role).deactivate();
        self.refresh_toggle(sessions, role, host);

        logging::log_ui_event("finder", "select", Some(&record.id));
    }

    /// Push the toggle visual that matches the role's current session state.
    pub fn refresh_toggle(&self, sessions: &FinderSessions, role: Role, host: &mut impl FinderHost) {
        let state = sessions.get(role).state;
        debug!(role = %role, ?state, "Refreshing toggle");
        host.apply_toggle_visual(role, ToggleVisual::for_state(state));
    }

    fn run_and_render(&self, role: Role, text: &str, host: &mut impl FinderHost) {
        let started = Instant::now();
        let matches = self.search(Some(text));
        logging::log_search_event(
            role.as_str(),
            text,
            matches.len(),
            started.elapsed().as_micros(),
        );
        host.render_results(role, ResultsView::from_matches(&matches, &self.labels));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::host::{FloorDisplay, HostEvent, InputBinding, MemoryHost};
    use crate::finder::session::SessionState;

    fn library_locator() -> CrossFloorLocator {
        let registry = LocationRegistry::new(vec![
            LocationRecord::new("r1", Some("Library"), "room", "1"),
            LocationRecord::new("r2", Some("Library Annex"), "room", "2"),
            LocationRecord::new("c1", Some("Library Hall"), "corridor", "1"),
        ]);
        CrossFloorLocator::from_config(&Config::default(), Some(Arc::new(registry)))
    }

    fn row_ids(view: Option<&ResultsView>) -> Vec<String> {
        view.map(|v| v.rows().iter().map(|r| r.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_toggle_with_empty_input_only_refreshes_button() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));

        locator.toggle(&mut sessions, Role::Start, &mut host);

        assert!(sessions.is_active(Role::Start));
        assert!(host.panel(Role::Start).is_none());
        assert_eq!(host.events().len(), 1);
        assert!(host.toggle_visual(Role::Start).is_some_and(|v| v.active));
    }

    #[test]
    fn test_toggle_with_text_searches_immediately() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        host.type_text(Role::End, "library");

        locator.toggle(&mut sessions, Role::End, &mut host);

        assert_eq!(row_ids(host.panel(Role::End)), vec!["r1", "r2"]);
        assert!(host.panel(Role::Start).is_none());
    }

    #[test]
    fn test_toggle_off_does_not_render() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        host.type_text(Role::Start, "library");

        locator.toggle(&mut sessions, Role::Start, &mut host);
        host.drain_events();
        locator.toggle(&mut sessions, Role::Start, &mut host);

        assert!(!sessions.is_active(Role::Start));
        let events = host.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], HostEvent::Toggle { role: Role::Start, .. }));
    }

    #[test]
    fn test_input_ignored_while_inactive() {
        let locator = library_locator();
        let sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));

        locator.on_input_changed(&sessions, Role::Start, "library", &mut host);

        assert!(host.events().is_empty());
    }

    #[test]
    fn test_input_rerenders_while_active() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        locator.toggle(&mut sessions, Role::Start, &mut host);

        locator.on_input_changed(&sessions, Role::Start, "annex", &mut host);
        assert_eq!(row_ids(host.panel(Role::Start)), vec!["r2"]);

        locator.on_input_changed(&sessions, Role::Start, "gymnasium", &mut host);
        assert_eq!(
            host.panel(Role::Start),
            Some(&ResultsView::Empty {
                message: "No locations found"
            })
        );
    }

    #[test]
    fn test_select_on_other_floor_changes_floor_once() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        host.type_text(Role::End, "library");
        locator.toggle(&mut sessions, Role::End, &mut host);

        let r2 = Arc::clone(locator.registry().and_then(|r| r.find("r2")).unwrap());
        locator.select_result(&mut sessions, Role::End, &r2, &mut host);

        assert_eq!(host.floor_changes(), vec!["2"]);
        assert_eq!(host.current_floor().as_deref(), Some("2"));
        assert_eq!(host.input_text(Role::End), "Library Annex");
        assert_eq!(host.selected_id(Role::End), Some("r2"));
        assert_eq!(host.panel(Role::End), Some(&ResultsView::Cleared));
        assert_eq!(sessions.get(Role::End).state, SessionState::Inactive);
        assert!(host.toggle_visual(Role::End).is_some_and(|v| !v.active));
    }

    #[test]
    fn test_select_on_current_floor_skips_floor_change() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("1"));
        locator.toggle(&mut sessions, Role::Start, &mut host);

        let r1 = Arc::clone(locator.registry().and_then(|r| r.find("r1")).unwrap());
        locator.select_result(&mut sessions, Role::Start, &r1, &mut host);

        assert!(host.floor_changes().is_empty());
        assert!(!sessions.is_active(Role::Start));
    }

    #[test]
    fn test_select_leaves_other_role_alone() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        locator.toggle(&mut sessions, Role::Start, &mut host);
        locator.toggle(&mut sessions, Role::End, &mut host);

        let r1 = LocationRecord::new("r1", Some("Library"), "room", "1");
        locator.select_result(&mut sessions, Role::End, &r1, &mut host);

        assert!(sessions.is_active(Role::Start));
        assert!(!sessions.is_active(Role::End));
    }

    #[test]
    fn test_button_always_matches_session() {
        let locator = library_locator();
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        host.type_text(Role::Start, "lib");

        for _ in 0..5 {
            locator.toggle(&mut sessions, Role::Start, &mut host);
            let visual = host.toggle_visual(Role::Start).cloned().unwrap();
            assert_eq!(visual.active, sessions.is_active(Role::Start));
        }
    }

    #[test]
    fn test_no_registry_renders_empty() {
        let locator = CrossFloorLocator::from_config(&Config::default(), None);
        let mut sessions = FinderSessions::new();
        let mut host = MemoryHost::new(Some("G"));
        host.type_text(Role::Start, "library");

        locator.toggle(&mut sessions, Role::Start, &mut host);

        assert!(matches!(
            host.panel(Role::Start),
            Some(ResultsView::Empty { .. })
        ));
    }
}
