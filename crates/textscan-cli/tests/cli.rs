use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with the configuration directory pointed at a scratch location.
fn textscan(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textscan").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn analyze_sample_lists_every_example_value() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("juan.perez@example.com valid"))
        .stdout(predicate::str::contains("+57 300 4567890 valid"))
        .stdout(predicate::str::contains("29/02/2024 valid"))
        .stdout(predicate::str::contains("1029384756 valid"))
        .stdout(predicate::str::contains("110111 valid"))
        .stdout(predicate::str::contains("https://www.tecnored.com valid"))
        .stdout(predicate::str::contains("ABC-123 valid"))
        .stdout(predicate::str::contains("CD456EF valid"));
}

#[test]
fn analyze_json_from_stdin() {
    let home = TempDir::new().unwrap();

    let output = textscan(&home)
        .args(["analyze", "--format", "json"])
        .write_stdin("Leap day 29/02/2024, not 29/02/2023.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["date"],
        serde_json::json!(["29/02/2024 valid", "29/02/2023 invalid"])
    );
    assert_eq!(json["email"], serde_json::json!([]));
    assert_eq!(json.as_object().unwrap().len(), 7);
}

#[test]
fn analyze_file_with_category_filter() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("input.txt");
    std::fs::write(&input, "Plates ABC-123 and AB-1234, mail a@b.co").unwrap();

    let output = textscan(&home)
        .args(["analyze", "-f", "json", "-k", "plate"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "plate": ["ABC-123 valid"] }));
}

#[test]
fn analyze_unknown_category_fails() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--text", "ABC-123", "-k", "iban"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category: iban"));
}

#[test]
fn analyze_blank_input_is_refused() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter or load some text"));
}

#[test]
fn analyze_without_matches() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--text", "nothing structured here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches found."));
}

#[test]
fn validate_single_values() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["validate", "date", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-29 valid"))
        .stdout(predicate::str::contains("date: 2024-02-29"));

    textscan(&home)
        .args(["validate", "plate", "AB-1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AB-1234 invalid"));

    textscan(&home)
        .args(["validate", "vin", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category: vin"));
}

#[test]
fn config_markers_change_annotations() {
    let home = TempDir::new().unwrap();

    textscan(&home).args(["config", "init"]).assert().success();
    textscan(&home)
        .args(["config", "set", "markers.invalid", "REJECTED"])
        .assert()
        .success();

    textscan(&home)
        .args(["config", "get", "markers.invalid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"REJECTED\""));

    textscan(&home)
        .args(["analyze", "--text", "due 31/04/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("31/04/2024 REJECTED"));
}

#[test]
fn explicit_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    std::fs::write(&config, r#"{"scan": {"categories": ["url"]}, "markers": {"valid": "yes"}}"#).unwrap();

    let output = textscan(&home)
        .args(["analyze", "--sample", "-f", "json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let urls = json["url"].as_array().unwrap();
    assert!(urls.contains(&serde_json::json!("https://www.tecnored.com yes")));
    assert!(json.get("email").is_none());
}

#[test]
fn config_init_refuses_overwrite() {
    let home = TempDir::new().unwrap();

    textscan(&home).args(["config", "init"]).assert().success();
    textscan(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    textscan(&home).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn categories_and_sample() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("national-id"))
        .stdout(predicate::str::contains("postal-code"));

    textscan(&home)
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("CD456EF"));
}

#[test]
fn config_subcommands_use_explicit_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    std::fs::write(&config, r#"{"markers": {"valid": "YES"}}"#).unwrap();

    textscan(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "markers.valid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"YES\""));

    textscan(&home)
        .args(["config", "set", "markers.invalid", "NO", "--config"])
        .arg(&config)
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["markers"]["invalid"], serde_json::json!("NO"));
    assert_eq!(saved["markers"]["valid"], serde_json::json!("YES"));
    assert!(!home.path().join("textscan").join("config.json").exists());

    textscan(&home)
        .args(["config", "path", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));

    textscan(&home)
        .args(["analyze", "--text", "due 31/04/2024", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("31/04/2024 NO"));
}

#[test]
fn verbose_flag_after_subcommand() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--text", "ABC-123", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC-123 valid"));

    textscan(&home)
        .args(["-vv", "categories"])
        .assert()
        .success();
}

#[test]
fn analyze_detailed_requires_json() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--text", "ABC-123", "--detailed", "-f", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format json"));

    textscan(&home)
        .args(["analyze", "--text", "ABC-123", "--detailed", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\""));
}

#[test]
fn analyze_text_lists_only_found_categories() {
    let home = TempDir::new().unwrap();

    textscan(&home)
        .args(["analyze", "--text", "plate ABC-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC-123 valid"))
        .stdout(predicate::str::contains("Email").not());
}
