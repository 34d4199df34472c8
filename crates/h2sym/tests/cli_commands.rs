#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn h2sym(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_h2sym"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("h2sym should run")
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect()
}

#[test]
fn lookup_known_codes_as_json() {
    let output = h2sym(&["--format", "json", "lookup", "frame-type", "4", "0x1"]);

    assert!(output.status.success());
    let records = json_lines(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "SETTINGS");
    assert_eq!(records[0]["known"], true);
    assert_eq!(records[1]["name"], "HEADERS");
    assert!(records[0]["schema_id"]
        .as_str()
        .map(|s| s.ends_with("symbol.schema.json"))
        .unwrap_or(false));
}

#[test]
fn lookup_unknown_code_falls_back_to_raw_value() {
    let output = h2sym(&["--format", "json", "lookup", "error-code", "14"]);

    assert!(output.status.success());
    let records = json_lines(&output);
    assert_eq!(records.len(), 1);
    assert!(records[0]["name"].is_null());
    assert_eq!(records[0]["display"], "UNKNOWN(0xe)");
    assert_eq!(records[0]["known"], false);
}

#[test]
fn strict_lookup_of_unknown_code_returns_60() {
    let output = h2sym(&["--format", "raw", "lookup", "frame-type", "99", "--strict"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized frame-type code 99"));
}

#[test]
fn malformed_code_returns_64() {
    let output = h2sym(&["lookup", "frame-type", "nine"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn raw_lookup_prints_names_only() {
    let output = h2sym(&["--format", "raw", "lookup", "settings", "1", "6"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "HEADER_TABLE_SIZE\nMAX_HEADER_LIST_SIZE\n");
}

#[test]
fn reverse_lookup_resolves_exact_name() {
    let output = h2sym(&["--format", "raw", "code", "error-code", "ENHANCE_YOUR_CALM"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "11\n");

    let output = h2sym(&["code", "error-code", "enhance_your_calm"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn list_all_tables_reports_exact_sizes() {
    let output = h2sym(&["--format", "json", "list"]);

    assert!(output.status.success());
    let tables = json_lines(&output);
    let sizes: Vec<(String, u64)> = tables
        .iter()
        .map(|t| {
            (
                t["category"].as_str().unwrap_or_default().to_string(),
                t["size"].as_u64().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("frame-type".to_string(), 10),
            ("settings-parameter".to_string(), 6),
            ("error-code".to_string(), 14),
        ]
    );
}

#[test]
fn envinfo_reports_version() {
    let output = h2sym(&["--format", "json", "envinfo"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("envinfo.schema.json"));
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("envinfo should emit json");
    assert_eq!(
        payload.get("version").and_then(|v| v.as_str()),
        Some(env!("CARGO_PKG_VERSION"))
    );
}
