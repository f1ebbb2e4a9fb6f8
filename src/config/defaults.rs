//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Default config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.floor-finder/config.json";

/// Floors from lowest to highest
pub const DEFAULT_FLOOR_ORDER: &[&str] = &["G", "1", "2", "3"];

/// Display names for the default floors
pub const DEFAULT_FLOOR_LABELS: &[(&str, &str)] = &[
    ("G", "Ground"),
    ("1", "First"),
    ("2", "Second"),
    ("3", "Third"),
];

/// Maximum number of results returned by a cross-floor search
pub const DEFAULT_RESULT_LIMIT: usize = 25;

/// Location categories that are never offered as destinations
pub const DEFAULT_EXCLUDED_CATEGORIES: &[&str] = &["corridor"];
