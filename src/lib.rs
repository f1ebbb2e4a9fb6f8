//! Floor Finder - find a location on any floor of the building
//!
//! Cross-floor search for an indoor-navigation page: match a query against
//! every location on every floor, rank the hits, and when one is chosen fill
//! the route input and switch the map to that floor.

pub mod config;
pub mod error;
pub mod finder;
pub mod floors;
pub mod locations;
pub mod logging;
pub mod stdin_commands;
