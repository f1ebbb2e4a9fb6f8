//! Locations module - the building's named places and how to find them
//!
//! # Module Structure
//!
//! - `types` - `LocationRecord`, `LocationRegistry`, `LocationMatch`
//! - `loader` - Registry loading from JSON
//! - `search` - Cross-floor substring search and ranking

mod loader;
mod search;
mod types;

pub use loader::{load_registry, parse_registry};
pub use search::CrossFloorSearch;
pub use types::{LocationMatch, LocationRecord, LocationRegistry};

#[cfg(test)]
#[path = "../locations_tests.rs"]
mod tests;
