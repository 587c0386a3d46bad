//! Configuration layering tests

use asset_bridge::config::{AppConfig, ConfigOverrides};
use asset_bridge::CliError;
use bridge_core::{FilterMode, TextureSubresourcePolicy, WrapMode};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    )
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("asset-bridge.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_without_sources() {
    let config = AppConfig::load_with_env(None, no_env()).unwrap();

    assert_eq!(config, AppConfig::default());
    assert!(config.sync.create_subfolders);
    assert!(config.sync.overwrite_existing);
    assert_eq!(config.sync.destination_root, PathBuf::from("Assets/Imported/UnrealAssets"));
    assert_eq!(config.texture.max_texture_size, 2048);
    assert!(config.validate().is_ok());
}

#[test]
fn test_file_values_override_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        r#"
[import]
export_dir = "/exports/level01"

[sync]
destination_root = "Assets/Imported/Level01"
overwrite_existing = false
texture_subresources = "copy"

[texture]
filter_mode = "trilinear"
wrap_mode = "clamp"
max_texture_size = 4096
"#,
    );

    let config = AppConfig::load_with_env(Some(&path), no_env()).unwrap();

    assert_eq!(config.import.export_dir, PathBuf::from("/exports/level01"));
    assert_eq!(config.report_path(), PathBuf::from("/exports/level01/export_report.json"));
    assert_eq!(config.sync.destination_root, PathBuf::from("Assets/Imported/Level01"));
    assert!(config.sync.create_subfolders);
    assert!(!config.sync.overwrite_existing);
    assert_eq!(config.sync.texture_subresources, TextureSubresourcePolicy::Copy);
    assert_eq!(config.texture.filter_mode, FilterMode::Trilinear);
    assert_eq!(config.texture.wrap_mode, WrapMode::Clamp);
    assert_eq!(config.texture.max_texture_size, 4096);
    assert!(config.texture.generate_mip_maps);
}

#[test]
fn test_environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        r#"
[sync]
overwrite_existing = true
"#,
    );

    let config = AppConfig::load_with_env(
        Some(&path),
        env(&[
            ("BRIDGE_SYNC__OVERWRITE_EXISTING", "false"),
            ("BRIDGE_TEXTURE__MAX_TEXTURE_SIZE", "512"),
        ]),
    )
    .unwrap();

    assert!(!config.sync.overwrite_existing);
    assert_eq!(config.texture.max_texture_size, 512);
}

#[test]
fn test_missing_config_file_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let err = AppConfig::load_with_env(Some(&missing), no_env()).unwrap_err();
    assert!(matches!(err, CliError::Config(msg) if msg.contains("nope.toml")));
}

#[test]
fn test_cli_overrides_apply_last() {
    let mut config = AppConfig::default();
    config.apply_overrides(&ConfigOverrides {
        export_dir: Some(PathBuf::from("/tmp/export")),
        destination: Some(PathBuf::from("Assets/Elsewhere")),
        no_subfolders: true,
        no_overwrite: true,
        copy_texture_subresources: true,
    });

    let sync = config.sync_configuration();
    assert_eq!(config.import.export_dir, PathBuf::from("/tmp/export"));
    assert_eq!(sync.destination_root, PathBuf::from("Assets/Elsewhere"));
    assert!(!sync.create_subfolders);
    assert!(!sync.overwrite_existing);
    assert_eq!(sync.texture_subresources, TextureSubresourcePolicy::Copy);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let mut config = AppConfig::default();
    config.apply_overrides(&ConfigOverrides::default());
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_validate_rejects_out_of_range_texture_size() {
    let mut config = AppConfig::default();
    config.texture.max_texture_size = 16;
    assert!(matches!(config.validate(), Err(CliError::Config(_))));

    config.texture.max_texture_size = 16384;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_destination() {
    let mut config = AppConfig::default();
    config.sync.destination_root = PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_explicit_report_file_wins() {
    let mut config = AppConfig::default();
    config.import.report_file = Some(PathBuf::from("/reports/custom.json"));
    assert_eq!(config.report_path(), PathBuf::from("/reports/custom.json"));
}

#[test]
fn test_toml_output_reloads() {
    let temp = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.texture.wrap_mode = WrapMode::MirrorOnce;

    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("[sync]"));
    assert!(rendered.contains("wrap_mode = \"mirror_once\""));

    let path = write_config(temp.path(), &rendered);
    let reloaded = AppConfig::load_with_env(Some(&path), no_env()).unwrap();
    assert_eq!(reloaded, config);
}
