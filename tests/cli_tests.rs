//! Integration tests for the pipeline-inspect binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const KITTI_CONFIG: &str = r#"
class_names: [Pedestrian, Cyclist, Car]
train_pipeline:
  - type: LoadPointsFromFile
    coord_type: LIDAR
    load_dim: 4
    use_dim: 4
  - type: LoadImageFromFile
  - type: LoadAnnotations3D
    with_bbox: true
    with_label_3d: true
  - type: Resize
    keep_ratio: true
  - type: RandomFlip3D
    flip_ratio_bev_horizontal: 0.5
  - type: PointsRangeFilter
    point_cloud_range: [0, -40, -3, 70.4, 40, 1]
  - type: Normalize
    to_rgb: true
  - type: DefaultFormatBundle3D
    class_names: [Pedestrian, Cyclist, Car]
  - type: Collect3D
    keys: [points, img, gt_bboxes_3d, gt_labels_3d]
test_pipeline:
  - type: LoadPointsFromFile
    coord_type: LIDAR
    load_dim: 4
    use_dim: 4
  - type: MultiScaleFlipAug3D
    img_scale: [1333, 800]
    pts_scale_ratio: 1
    flip: false
    transforms:
      - type: GlobalRotScaleTrans
        rot_range: [0, 0]
      - type: DefaultFormatBundle3D
        with_label: false
      - type: Collect3D
        keys: [points]
"#;

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kitti.yaml");
    fs::write(&config_path, KITTI_CONFIG).unwrap();
    (temp_dir, config_path)
}

fn inspect(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pipeline-inspect").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("PIPELINE_INSPECT_LOG_LEVEL")
        .env_remove("PIPELINE_INSPECT_WRAPPER_KIND")
        .env_remove("PIPELINE_INSPECT_LOADING_KINDS");
    cmd
}

fn kinds_of(yaml: &[u8]) -> Vec<String> {
    let steps: Vec<serde_json::Value> = serde_yaml::from_slice(yaml).unwrap();
    steps
        .iter()
        .map(|s| s["type"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_reduce_train_pipeline() {
    let (temp_dir, config_path) = setup();

    let output = inspect(&temp_dir)
        .args(["reduce", config_path.to_str().unwrap(), "-p", "train_pipeline"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        kinds_of(&output.stdout),
        [
            "LoadPointsFromFile",
            "LoadImageFromFile",
            "LoadAnnotations3D",
            "DefaultFormatBundle3D",
            "Collect3D"
        ]
    );
}

#[test]
fn test_reduce_flattens_wrapper() {
    let (temp_dir, config_path) = setup();

    let output = inspect(&temp_dir)
        .args([
            "reduce",
            config_path.to_str().unwrap(),
            "--pipeline",
            "test_pipeline",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        kinds_of(&output.stdout),
        ["LoadPointsFromFile", "DefaultFormatBundle3D", "Collect3D"]
    );
}

#[test]
fn test_reduce_json_output_keeps_params() {
    let (temp_dir, config_path) = setup();

    let output = inspect(&temp_dir)
        .args([
            "reduce",
            config_path.to_str().unwrap(),
            "-p",
            "train_pipeline",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(steps[0]["coord_type"], "LIDAR");
    assert_eq!(steps[0]["load_dim"], 4);
    assert_eq!(steps[4]["keys"][3], "gt_labels_3d");
}

#[test]
fn test_reduce_without_loading_step_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("augment.yaml");
    fs::write(&path, "- type: Resize\n- type: Normalize\n").unwrap();

    inspect(&temp_dir)
        .args(["reduce", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("must include a loading step"));
}

#[test]
fn test_reduce_ambiguous_pipeline_fails() {
    let (temp_dir, config_path) = setup();

    inspect(&temp_dir)
        .args(["reduce", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("train_pipeline"));
}

#[test]
fn test_reduce_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    inspect(&temp_dir)
        .args(["reduce", "does-not-exist.yaml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist.yaml"));
}

#[test]
fn test_classify_lists_nested_steps() {
    let (temp_dir, config_path) = setup();

    inspect(&temp_dir)
        .args(["classify", config_path.to_str().unwrap(), "-p", "test_pipeline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.transforms.0"))
        .stdout(predicate::str::contains("wrapper"))
        .stdout(predicate::str::contains("not-loading"));
}

#[test]
fn test_classify_json() {
    let (temp_dir, config_path) = setup();

    let output = inspect(&temp_dir)
        .args([
            "classify",
            config_path.to_str().unwrap(),
            "-p",
            "test_pipeline",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.as_array().unwrap().len(), 5);
    assert_eq!(report[1]["class"], "wrapper");
    assert_eq!(report[2]["class"], "not_loading");
    assert_eq!(report[3]["depth"], 1);
}

#[test]
fn test_extract_unwraps_list() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("results.json");
    fs::write(
        &results,
        r#"{"pts_filename": ["velodyne/000008.bin"], "sample_idx": 8}"#,
    )
    .unwrap();

    inspect(&temp_dir)
        .args(["extract", results.to_str().unwrap(), "pts_filename"])
        .assert()
        .success()
        .stdout("velodyne/000008.bin\n");
}

#[test]
fn test_extract_absent_key() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("results.json");
    fs::write(&results, r#"{"sample_idx": 8}"#).unwrap();

    inspect(&temp_dir)
        .args(["extract", results.to_str().unwrap(), "img"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("absent"));
}

#[test]
fn test_kinds_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".pipeline-inspect.toml"),
        "[kinds]\nloading = [\"LoadDepthFromFile\"]\nwrapper = \"TestTimeAug\"\n",
    )
    .unwrap();

    inspect(&temp_dir)
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrapper: TestTimeAug"))
        .stdout(predicate::str::contains("  - LoadDepthFromFile"))
        .stdout(predicate::str::contains("  - LoadPointsFromFile"));
}

#[test]
fn test_verbose_reports_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".pipeline-inspect.toml"),
        "[kinds]\nloading = [\"LoadDepthFromFile\"]\n",
    )
    .unwrap();

    inspect(&temp_dir)
        .args(["-v", "kinds"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded configuration from"))
        .stderr(predicate::str::contains(".pipeline-inspect.toml"));
}

#[test]
fn test_reduce_reports_bad_step_index() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    fs::write(&path, "- type: LoadPointsFromFile\n- load_dim: 4\n").unwrap();

    inspect(&temp_dir)
        .args(["reduce", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid step 1"));
}

#[test]
fn test_env_overrides_loading_kinds() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("depth.yaml");
    fs::write(&path, "- type: LoadDepthFromFile\n- type: Resize\n").unwrap();

    let output = inspect(&temp_dir)
        .env("PIPELINE_INSPECT_LOADING_KINDS", "LoadDepthFromFile, LoadRadar")
        .args(["reduce", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(kinds_of(&output.stdout), ["LoadDepthFromFile"]);
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".pipeline-inspect.toml"),
        "log_level = \"loud\"\n",
    )
    .unwrap();

    inspect(&temp_dir)
        .arg("kinds")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid log level"));
}
