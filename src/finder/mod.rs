//! Finder module - all-floors search mode for the route inputs
//!
//! # Module Structure
//!
//! - `session` - Per-role INACTIVE/ACTIVE state
//! - `ui_state` - Toggle button visual derived from session state
//! - `render` - Result rows and panel views
//! - `host` - Collaborator traits and the in-memory host
//! - `locator` - toggle / input / select operations

mod host;
mod locator;
mod render;
mod session;
mod ui_state;

pub use host::{
    FinderHost, FloorDisplay, HostEvent, InputBinding, MemoryHost, ResultsPanel, ToggleControl,
};
pub use locator::CrossFloorLocator;
pub use render::{ResultRow, ResultsView, NO_RESULTS_MESSAGE};
pub use session::{FinderSessions, Role, SearchSession, SessionState};
pub use ui_state::{ToggleVisual, TOGGLE_LABEL};
