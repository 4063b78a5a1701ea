// Test loading and saving simulation parameters through the filesystem
use diffbot_core::{DiffbotError, SimParams};
use tempfile::tempdir;

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("configs").join("sim.toml");

    let mut params = SimParams::default();
    params.iterations = 25;
    params.seed = Some(1234);
    params.controller.kp = 1.2;
    params.sensor.delay_steps = 4;
    params.command.angular = -0.5;

    params.save(&path).unwrap();
    let loaded = SimParams::load(&path).unwrap();

    assert_eq!(loaded, params);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let result = SimParams::load(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(DiffbotError::Io(_))));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[robot]\nwheel_radius = -0.05\n").unwrap();

    let err = SimParams::load(&path).unwrap_err();
    assert_eq!(err.parameter(), Some("wheel_radius"));
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "iterations = = 3\n").unwrap();

    let result = SimParams::load(&path);
    assert!(matches!(result, Err(DiffbotError::ConfigParse(_))));
}
