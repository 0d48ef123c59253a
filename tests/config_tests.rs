use std::fs;
use tempfile::TempDir;
use cluster_sync::config::enums::configuration_error::ConfigurationError;
use cluster_sync::config::structs::configuration::Configuration;

fn path_in(dir: &TempDir) -> String {
    dir.path().join("config.toml").to_string_lossy().to_string()
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let path = path_in(&temp_dir);
    let config_content = r#"
log_level = "debug"

[cluster]
name = "wall-east"
udp_port = 31000
udp_echo_broadcast_address = "192.168.10.255"
node_name = "wall-east-3"
server_port = 31001
connect_jitter_min_ms = 0
connect_jitter_max_ms = 250
connect_timeout_ms = 3000
discovery_enabled = false
"#;
    fs::write(&path, config_content).unwrap();

    let config = Configuration::load_from_file(&path, false).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.cluster.name, "wall-east");
    assert_eq!(config.cluster.udp_port, 31000);
    assert_eq!(config.cluster.udp_echo_broadcast_address, "192.168.10.255");
    assert_eq!(config.cluster.node_name(), Some("wall-east-3"));
    assert_eq!(config.cluster.server_port, 31001);
    assert_eq!(config.cluster.jitter_range(), 0..=250);
    assert!(!config.cluster.discovery_enabled);
}

#[test]
fn test_missing_file_without_create() {
    let temp_dir = TempDir::new().unwrap();
    let path = path_in(&temp_dir);

    let result = Configuration::load_from_file(&path, false);
    assert!(matches!(result, Err(ConfigurationError::Missing { .. })));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_create_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = path_in(&temp_dir);

    let result = Configuration::load_from_file(&path, true);
    assert!(matches!(result, Err(ConfigurationError::Created { .. })));

    let written = Configuration::load_from_file(&path, false).unwrap();
    assert_eq!(written, Configuration::init());
}

#[test]
fn test_broken_file_is_replaced_on_create() {
    let temp_dir = TempDir::new().unwrap();
    let path = path_in(&temp_dir);
    fs::write(&path, "log_level = [").unwrap();

    assert!(matches!(Configuration::load_from_file(&path, false), Err(ConfigurationError::Missing { .. })));
    assert!(matches!(Configuration::load_from_file(&path, true), Err(ConfigurationError::Created { .. })));
    assert!(Configuration::load_from_file(&path, false).is_ok());
}

#[test]
fn test_invalid_values_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = path_in(&temp_dir);
    fs::write(&path, "log_level = \"info\"\n[cluster]\nname = \"bad name\"\n").unwrap();

    let result = Configuration::load_from_file(&path, true);
    assert!(matches!(result, Err(ConfigurationError::Invalid { ref field, .. }) if field == "cluster.name"));
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = path_in(&temp_dir);
    let mut config = Configuration::init();
    config.cluster.name = "dome".to_string();
    config.cluster.connect_timeout_ms = 1200;

    Configuration::save_from_config(&path, &config).unwrap();
    let reloaded = Configuration::load_file(&path).unwrap();
    assert_eq!(reloaded, config);
}
