use super::*;
use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.get_result_limit(), DEFAULT_RESULT_LIMIT);
    assert_eq!(config.get_excluded_categories(), vec!["corridor"]);
    assert_eq!(config.get_floor_order().position("G"), 0);
    assert_eq!(config.get_floor_labels().label("3"), "Third");
    assert!(config.get_records_path().is_none());
}

#[test]
fn test_config_deserializes_camel_case() {
    let json = r#"{
        "floorOrder": ["B", "G", "1"],
        "floorLabels": {"B": "Basement"},
        "resultLimit": 10,
        "excludedCategories": ["Corridor", "Stairwell"],
        "recordsPath": "/data/nodes.json"
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.get_result_limit(), 10);
    assert_eq!(config.get_floor_order().position("B"), 0);
    assert_eq!(config.get_floor_order().position("2"), -1);
    assert_eq!(
        config.get_excluded_categories(),
        vec!["corridor".to_string(), "stairwell".to_string()]
    );
    assert_eq!(
        config.get_records_path(),
        Some(std::path::PathBuf::from("/data/nodes.json"))
    );
}

#[test]
fn test_custom_labels_merge_over_defaults() {
    let mut labels = HashMap::new();
    labels.insert("B".to_string(), "Basement".to_string());
    labels.insert("G".to_string(), "Lobby".to_string());
    let config = Config {
        floor_labels: Some(labels),
        ..Default::default()
    };

    let resolved = config.get_floor_labels();
    assert_eq!(resolved.label("B"), "Basement");
    assert_eq!(resolved.label("G"), "Lobby");
    assert_eq!(resolved.label("1"), "First");
}

#[test]
fn test_empty_object_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert!(config.floor_order.is_none());
    assert_eq!(config.get_result_limit(), 25);
}

#[test]
fn test_serialization_skips_unset_fields() {
    let config = Config {
        result_limit: Some(5),
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"resultLimit":5}"#);
}

#[test]
fn test_load_config_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(Some(&dir.path().join("nope.json")));
    assert!(config.result_limit.is_none());
}

#[test]
fn test_load_config_invalid_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{{ resultLimit: ").unwrap();

    assert!(read_config(&path).is_err());
    let config = load_config(Some(&path));
    assert_eq!(config.get_result_limit(), DEFAULT_RESULT_LIMIT);
}

#[test]
fn test_load_config_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"resultLimit": 3}"#).unwrap();

    let config = load_config(Some(&path));
    assert_eq!(config.get_result_limit(), 3);
}
