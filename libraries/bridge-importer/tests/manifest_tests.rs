//! Export report loading tests

use bridge_importer::manifest::{load, load_from_export_dir, REPORT_FILE_NAME};
use bridge_importer::LoadError;
use std::fs;
use tempfile::TempDir;

use test_helpers::{asset_json, create_export_file, init_tracing, write_report};

#[test]
fn test_load_preserves_count_and_order() {
    init_tracing();
    let export = TempDir::new().unwrap();

    let names = ["Chair", "Hero", "Run", "Brick", "Wall"];
    let types = ["StaticMesh", "SkeletalMesh", "Animation", "Material", "Texture"];
    let assets = names
        .iter()
        .zip(types.iter())
        .map(|(name, ty)| {
            let path = create_export_file(export.path(), &format!("{name}.bin"), b"x");
            asset_json(ty, name, &path)
        })
        .collect();
    write_report(export.path(), assets);

    let report = load_from_export_dir(export.path()).unwrap();

    assert_eq!(report.len(), 5);
    let loaded: Vec<&str> = report.assets.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(loaded, names);

    let session = report.export_session.as_ref().unwrap();
    assert_eq!(session.total_assets, 5);
    assert!(session.parsed_timestamp().is_some());
}

#[test]
fn test_missing_assets_field_is_empty_report() {
    let export = TempDir::new().unwrap();
    let path = export.path().join(REPORT_FILE_NAME);
    fs::write(
        &path,
        r#"{"export_session": {"timestamp": "2024-01-01T00:00:00", "total_assets": 0, "export_path": "/x/"}}"#,
    )
    .unwrap();

    let report = load(&path).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_missing_file_is_not_found() {
    let export = TempDir::new().unwrap();

    let err = load_from_export_dir(export.path()).unwrap_err();
    match err {
        LoadError::NotFound(path) => assert_eq!(path, export.path().join(REPORT_FILE_NAME)),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_is_parse_error_naming_path() {
    let export = TempDir::new().unwrap();
    let path = export.path().join(REPORT_FILE_NAME);
    fs::write(&path, "{ not json").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let export = TempDir::new().unwrap();
    let path = export.path().join(REPORT_FILE_NAME);
    fs::write(&path, r#"{"assets": {"type": "Texture"}}"#).unwrap();

    assert!(matches!(load(&path), Err(LoadError::Parse { .. })));
}

#[test]
fn test_material_textures_loaded() {
    let export = TempDir::new().unwrap();
    let path = export.path().join(REPORT_FILE_NAME);
    fs::write(
        &path,
        r#"{"assets": [{
            "type": "Material", "name": "Brick", "path": "/x/MAT_Brick.json",
            "timestamp": "2024-01-01T00:00:00",
            "textures": [
                {"parameter": "diffuse", "path": "/x/TEX_Brick_diffuse.png"},
                {"parameter": "normal", "path": "/x/TEX_Brick_normal.png"}
            ]
        }]}"#,
    )
    .unwrap();

    let report = load(&path).unwrap();
    let params: Vec<&str> = report.assets[0]
        .textures
        .iter()
        .map(|t| t.parameter.as_str())
        .collect();
    assert_eq!(params, vec!["diffuse", "normal"]);
}
