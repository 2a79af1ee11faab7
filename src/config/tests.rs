use super::*;
use crate::error::{ErrorCode, InspectError};
use crate::pipeline::StepClass;
use std::fs;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_default_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), content).unwrap();
}

#[test]
fn test_load_default_config() {
    let temp_dir = setup_test_dir();
    let config = ConfigLoader::new(temp_dir.path()).load(None).unwrap();

    assert_eq!(config.get_log_level(), "info");
    assert!(!config.kinds.replace_defaults);
}

#[test]
fn test_load_config_from_working_dir() {
    let temp_dir = setup_test_dir();
    write_default_config(
        &temp_dir,
        r#"
log_level = "debug"

[kinds]
loading = ["LoadDepthFromFile"]
"#,
    );

    let config = ConfigLoader::new(temp_dir.path()).load(None).unwrap();
    assert_eq!(config.log_level.as_deref(), Some("debug"));

    let registry = config.kinds.to_registry();
    assert!(registry.is_loading("LoadDepthFromFile"));
    assert!(registry.is_loading("LoadPointsFromFile"));
}

#[test]
fn test_load_with_explicit_path() {
    let temp_dir = setup_test_dir();
    let custom = temp_dir.path().join("custom.toml");
    fs::write(
        &custom,
        r#"
[kinds]
loading = ["ReadFrame"]
wrapper = "TestTimeAug"
replace_defaults = true
"#,
    )
    .unwrap();

    let config = ConfigLoader::new(temp_dir.path())
        .load(Some(custom.as_path()))
        .unwrap();
    let registry = config.kinds.to_registry();

    assert_eq!(registry.classify_kind("ReadFrame"), StepClass::Loading);
    assert_eq!(registry.classify_kind("TestTimeAug"), StepClass::Wrapper);
    assert_eq!(
        registry.classify_kind("LoadPointsFromFile"),
        StepClass::NotLoading
    );
}

#[test]
fn test_missing_explicit_path() {
    let temp_dir = setup_test_dir();
    let missing = temp_dir.path().join("nope.toml");

    let err = ConfigLoader::new(temp_dir.path())
        .load(Some(missing.as_path()))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
}

#[test]
fn test_invalid_toml() {
    let temp_dir = setup_test_dir();
    write_default_config(&temp_dir, "log_level = not valid toml");

    let err = ConfigLoader::new(temp_dir.path()).load(None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
    assert!(matches!(err, InspectError::Config { path: Some(_), .. }));
}

#[test]
fn test_invalid_log_level() {
    let config = InspectConfig {
        log_level: Some("loud".to_string()),
        ..InspectConfig::default()
    };
    let err = ConfigValidator::validate_config(&config).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
}

#[test]
fn test_wrapper_cannot_be_loading_kind() {
    let config = InspectConfig {
        kinds: KindsConfig {
            loading: vec!["MultiScaleFlipAug3D".to_string()],
            ..KindsConfig::default()
        },
        ..InspectConfig::default()
    };
    let err = ConfigValidator::validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("MultiScaleFlipAug3D"));
}

#[test]
fn test_replace_defaults_needs_loading_kinds() {
    let config = InspectConfig {
        kinds: KindsConfig {
            replace_defaults: true,
            ..KindsConfig::default()
        },
        ..InspectConfig::default()
    };
    assert!(ConfigValidator::validate_config(&config).is_err());
}

#[test]
fn test_empty_wrapper_kind() {
    let config = InspectConfig {
        kinds: KindsConfig {
            wrapper: Some("  ".to_string()),
            ..KindsConfig::default()
        },
        ..InspectConfig::default()
    };
    assert!(ConfigValidator::validate_config(&config).is_err());
}

#[test]
fn test_default_registry_matches_builtins() {
    let registry = KindsConfig::default().to_registry();
    assert_eq!(registry, crate::pipeline::KindRegistry::new());
}

#[test]
fn test_config_file_resolution() {
    let temp_dir = setup_test_dir();
    let loader = ConfigLoader::new(temp_dir.path());
    assert_eq!(loader.config_file(None), None);

    write_default_config(&temp_dir, "log_level = \"warn\"\n");
    assert_eq!(
        loader.config_file(None),
        Some(temp_dir.path().join(DEFAULT_CONFIG_FILE))
    );

    let custom = temp_dir.path().join("custom.toml");
    assert_eq!(loader.config_file(Some(custom.as_path())), Some(custom.clone()));
}
