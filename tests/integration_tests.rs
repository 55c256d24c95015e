use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("paramedit");
    cmd.env_remove("PARAMEDIT_OUTPUT__FORMAT")
        .env_remove("PARAMEDIT_OUTPUT__PATH");
    cmd
}

#[test]
fn test_cli_prints_demo_model() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("\"paramValues\""))
        .stdout(predicate::str::contains("\"paramId\": 1"))
        .stdout(predicate::str::contains("\"casual\""))
        .stdout(predicate::str::contains("\"maxi\""));
}

#[test]
fn test_cli_set_edits_value() {
    cmd()
        .args(["--set", "2=mini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mini\""))
        .stdout(predicate::str::contains("\"casual\""))
        .stdout(predicate::str::contains("maxi").not());
}

#[test]
fn test_cli_set_applies_in_order() {
    cmd()
        .args(["--set", "1=a", "--set", "1=b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"b\""))
        .stdout(predicate::str::contains("\"value\": \"a\"").not());
}

#[test]
fn test_cli_set_unknown_id_fails() {
    cmd()
        .args(["--set", "9=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown parameter id 9"));
}

#[test]
fn test_cli_set_malformed_fails() {
    cmd()
        .args(["--set", "mini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected ID=VALUE"));
}

#[test]
fn test_cli_yaml_format() {
    cmd()
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paramValues:"))
        .stdout(predicate::str::contains("- paramId: 1"))
        .stdout(predicate::str::contains("colors: []"));
}

#[test]
fn test_cli_env_selects_format() {
    cmd()
        .env("PARAMEDIT_OUTPUT__FORMAT", "yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("paramValues:"));
}

#[test]
fn test_cli_config_and_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("form.toml");
    let output = dir.path().join("model.json");
    std::fs::write(
        &config,
        r#"
[[form.params]]
id = 3
name = "Size"

[form.model]
colors = ["blue"]
"#,
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .args(["--set", "3=XL"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote model to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"paramId\": 3"));
    assert!(written.contains("\"XL\""));
    assert!(written.contains("\"blue\""));
}

#[test]
fn test_cli_unseeded_param_omitted() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("form.toml");
    std::fs::write(
        &config,
        r#"
[[form.params]]
id = 3
name = "Size"
"#,
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"paramValues\": []"));
}

#[test]
fn test_cli_missing_config_fails() {
    cmd()
        .args(["--config", "/nonexistent/paramedit.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_cli_unsupported_param_type_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("form.toml");
    std::fs::write(
        &config,
        r#"
[[form.params]]
id = 1
name = "Count"
type = "number"
"#,
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_save_config() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("saved.toml");

    cmd()
        .arg("--save-config")
        .arg(&saved)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved form definition"));

    let content = std::fs::read_to_string(&saved).unwrap();
    assert!(content.contains("[[params]]"));
    assert!(content.contains("Length"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paramedit"));
}
