//! Tests for config file and environment layering.

use crate::support::*;

#[test]
fn test_config_default_identifier() {
    let t = Test::new();
    t.write_config("[selector]\ndefault_identifier = \"anonymous\"\n");

    let output = t.cmd().args(["-p", "pw"]).output().unwrap();

    assert_success(&output);
    assert_eq!(t.read_store(), "anonymous\npw\n\n");
}

#[test]
fn test_config_store_path() {
    let t = Test::new();
    let path = t.dir.path().join("from-config");
    t.write_config(&format!("[store]\npath = \"{}\"\n", path.display()));

    assert_success(&t.add("alice", "p1", ""));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "alice\np1\n\n");
}

#[test]
fn test_file_flag_beats_env_and_config() {
    let t = Test::new();
    let from_config = t.dir.path().join("from-config");
    let from_env = t.dir.path().join("from-env");
    let from_flag = t.dir.path().join("from-flag");
    t.write_config(&format!("[store]\npath = \"{}\"\n", from_config.display()));

    let output = t
        .cmd()
        .env("CREDMENU_FILE", &from_env)
        .args(["--file", from_flag.to_str().unwrap(), "--clean"])
        .output()
        .unwrap();

    assert_success(&output);
    assert!(from_flag.exists());
    assert!(!from_env.exists());
    assert!(!from_config.exists());
}

#[test]
fn test_env_beats_config() {
    let t = Test::new();
    let from_config = t.dir.path().join("from-config");
    let from_env = t.dir.path().join("from-env");
    t.write_config(&format!("[store]\npath = \"{}\"\n", from_config.display()));

    let output = t.cmd().env("CREDMENU_FILE", &from_env).arg("--clean").output().unwrap();

    assert_success(&output);
    assert!(from_env.exists());
    assert!(!from_config.exists());
}

#[test]
fn test_explicit_config_path() {
    let t = Test::new();
    let config = t.dir.path().join("custom.toml");
    std::fs::write(&config, "[selector]\ndefault_identifier = \"ghost\"\n").unwrap();

    let output = t
        .cmd()
        .env("CREDMENU_CONFIG", &config)
        .args(["-p", "pw"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.read_store(), "ghost\npw\n\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("CREDMENU_CONFIG", t.dir.path().join("nope.toml"))
        .arg("--clean")
        .output()
        .unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "failed to read config");
}

#[test]
fn test_invalid_config_fails() {
    let t = Test::new();
    t.write_config("[selector]\nwidth = 0\n");

    let output = t.clean();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "selector.width");
}

#[test]
fn test_unknown_config_key_fails() {
    let t = Test::new();
    t.write_config("[selector]\nwidht = 20\n");

    let output = t.clean();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid config");
}
