//! Configuration module - floor ordering, labels and search limits
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - The `Config` struct and its defaulting accessors
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_FLOOR_LABELS, DEFAULT_FLOOR_ORDER,
    DEFAULT_RESULT_LIMIT,
};

pub use types::Config;

pub use loader::{default_config_path, load_config, read_config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
