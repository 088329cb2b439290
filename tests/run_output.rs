use std::fs;
use std::path::Path;

use levelgen::{run, ConfigSource, LevelGenError, RunOptions};

fn write_config(dir: &Path, text: &str) -> ConfigSource {
    let path = dir.join("components.json");
    fs::write(&path, text).unwrap();
    ConfigSource::File(path)
}

fn options(config: ConfigSource, output: &Path) -> RunOptions {
    RunOptions {
        config,
        output_dir: Some(output.to_path_buf()),
        pretty: false,
    }
}

#[test]
fn malformed_component_does_not_block_others() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");
    let config = write_config(
        dir.path(),
        r#"{
            "HULL": { "BASE_TIME": "abc", "MIN_LEVEL": "1", "MAX_LEVEL": "10" },
            "SHIELD": { "BASE_TIME": "90", "MIN_LEVEL": "1", "MAX_LEVEL": "10" }
        }"#,
    );

    let report = run(&options(config, &output)).unwrap();

    assert!(output.join("SHIELD_LEVELS.json").exists());
    assert!(!output.join("HULL_LEVELS.json").exists());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].component, "HULL");
    assert!(report.failed[0].error.to_string().contains("BASE_TIME"));
}

#[test]
fn output_file_matches_formula() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");
    let config = write_config(
        dir.path(),
        r#"{ "ENGINE": { "BASE_TIME": "100", "MIN_LEVEL": "1", "MAX_LEVEL": "3" } }"#,
    );

    run(&options(config, &output)).unwrap();

    let text = fs::read_to_string(output.join("ENGINE_LEVELS.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 3);
    for (key, entry) in object {
        let level: i64 = key.parse().unwrap();
        assert_eq!(entry["LEVEL"].as_i64(), Some(level));
        let expected = 100.0 / (level as f64 / 10.0 + 1.0);
        let actual = entry["TIME_ELAPSED"].as_f64().unwrap();
        assert!((actual - expected).abs() < 1e-9, "level {level}: {actual} != {expected}");
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    run(&options(ConfigSource::Bundled, &first)).unwrap();
    run(&options(ConfigSource::Bundled, &second)).unwrap();

    let mut names: Vec<_> = fs::read_dir(&first)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    names.sort();
    assert!(!names.is_empty());

    for name in names {
        let a = fs::read(first.join(&name)).unwrap();
        let b = fs::read(second.join(&name)).unwrap();
        assert_eq!(a, b, "{:?} differs between runs", name);
    }
}

#[test]
fn rerun_into_existing_directory_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");

    let first = run(&options(ConfigSource::Bundled, &output)).unwrap();
    let second = run(&options(ConfigSource::Bundled, &output)).unwrap();

    assert!(first.is_clean());
    assert_eq!(first.written, second.written);
}

#[test]
fn missing_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigSource::File(dir.path().join("absent.json"));

    let err = run(&options(config, &dir.path().join("output"))).unwrap_err();

    assert!(matches!(err, LevelGenError::ConfigUnavailable { .. }));
    assert!(err.is_fatal());
}

#[test]
fn unusable_output_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, b"not a directory").unwrap();

    let err = run(&options(ConfigSource::Bundled, &blocked)).unwrap_err();

    assert!(matches!(err, LevelGenError::OutputDirectoryUnavailable { .. }));
}
