//! Location registry loading from JSON files

use std::path::Path;

use serde::Deserialize;
use tracing::{info, instrument};

use super::types::{LocationRecord, LocationRegistry};
use crate::error::{FloorFinderError, Result};

/// Object form of a registry file: `{"nodes": [...]}`
#[derive(Deserialize)]
struct NodesFile {
    nodes: Vec<LocationRecord>,
}

/// Parse registry JSON already in memory.
///
/// Accepts a bare array of nodes or `{"nodes": [...]}`. The shape is picked from
/// the first token so serde's field and line/column detail reaches the error.
pub fn parse_registry(content: &str, source: &str) -> Result<LocationRegistry> {
    let parsed = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<LocationRecord>>(content)
    } else {
        serde_json::from_str::<NodesFile>(content).map(|file| file.nodes)
    };
    let records = parsed.map_err(|e| FloorFinderError::RegistryParse {
        path: source.to_string(),
        source: e,
    })?;
    Ok(LocationRegistry::new(records))
}

/// Load the location registry from a JSON file.
#[instrument(name = "load_registry", skip_all, fields(path = %path.display()))]
pub fn load_registry(path: &Path) -> Result<LocationRegistry> {
    let content = std::fs::read_to_string(path).map_err(|e| FloorFinderError::RegistryRead {
        path: path.display().to_string(),
        source: e,
    })?;
    let registry = parse_registry(&content, &path.display().to_string())?;
    info!(
        records = registry.len(),
        floors = registry.floor_counts().len(),
        "Loaded location registry"
    );
    Ok(registry)
}
