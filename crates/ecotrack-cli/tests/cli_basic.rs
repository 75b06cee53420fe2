//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temporary home directory and
//! checks stdout, stderr and the exit code.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with `home` as the home directory.
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_ecotrack-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("ECOTRACK_ENV")
        .env_remove("ECOTRACK_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_ok(home: &Path, args: &[&str]) -> String {
    let (code, stdout, stderr) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

#[test]
fn test_calc_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_ok(
        home.path(),
        &["calc", "--distance", "0", "--electricity", "3", "--diet", "vegetarian", "--json"],
    );

    let view: serde_json::Value = serde_json::from_str(&out).unwrap();
    let total = view["breakdown"]["total"].as_f64().unwrap();
    assert!((total - 5.36).abs() < 1e-9);
    assert_eq!(view["band"], "low");
    let badges = view["badges"].as_array().unwrap();
    assert!(badges.iter().any(|b| b.as_str().unwrap().contains("Car-Free Day")));
}

#[test]
fn test_calc_treats_garbage_as_zero() {
    let home = tempfile::tempdir().unwrap();
    let out = run_ok(
        home.path(),
        &["calc", "--distance", "abc", "--electricity", "-4", "--json"],
    );
    let view: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(view["input"]["distance_km"].as_f64(), Some(0.0));
    assert_eq!(view["input"]["electricity_kwh"].as_f64(), Some(0.0));
}

#[test]
fn test_save_clamps_negative_values() {
    let home = tempfile::tempdir().unwrap();
    run_ok(
        home.path(),
        &["save", "--distance", "-3", "--electricity", "-0.5", "--diet", "vegetarian"],
    );

    let out = run_ok(home.path(), &["history", "--json"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["distance_km"].as_f64(), Some(0.0));
    assert_eq!(entries[0]["electricity_kwh"].as_f64(), Some(0.0));
}

#[test]
fn test_calc_rejects_unknown_diet() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["calc", "--diet", "carnivore"]);
    assert_ne!(code, 0);
}

#[test]
fn test_save_then_history_and_achievements() {
    let home = tempfile::tempdir().unwrap();
    let out = run_ok(
        home.path(),
        &["save", "--distance", "10", "--electricity", "5", "--diet", "mixed"],
    );
    assert!(out.contains("Entry saved"));
    assert!(out.contains("10.9 kg CO₂"));

    // Second save on the same day replaces the entry.
    let out = run_ok(home.path(), &["save", "--diet", "vegetarian"]);
    assert!(out.contains("replaced"));

    let out = run_ok(home.path(), &["history", "--json"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["diet"], "vegetarian");

    let out = run_ok(home.path(), &["achievements", "--json"]);
    let a: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(a["days_tracked"], 2);
}

#[test]
fn test_week_has_seven_days() {
    let home = tempfile::tempdir().unwrap();
    let out = run_ok(home.path(), &["week", "--json"]);
    let slots: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(slots.len(), 7);

    // Placeholders persist between commands.
    let again = run_ok(home.path(), &["week", "--json"]);
    assert_eq!(out, again);
}

#[test]
fn test_target_set_and_get() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(run_ok(home.path(), &["target", "get"]).trim(), "15");

    run_ok(home.path(), &["target", "set", "12.5"]);
    assert_eq!(run_ok(home.path(), &["target", "get"]).trim(), "12.5");

    let (code, _, stderr) = run_cli(home.path(), &["target", "set", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_bulk_reset_requires_yes() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["save", "--distance", "2"]);

    let (code, _, stderr) = run_cli(home.path(), &["reset", "history"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("requires explicit confirmation"));
    let out = run_ok(home.path(), &["history", "--json"]);
    assert_eq!(serde_json::from_str::<Vec<serde_json::Value>>(&out).unwrap().len(), 1);

    let out = run_ok(home.path(), &["reset", "history", "--yes"]);
    assert!(out.contains("All history cleared!"));
    let out = run_ok(home.path(), &["history", "--json"]);
    assert!(serde_json::from_str::<Vec<serde_json::Value>>(&out).unwrap().is_empty());
}

#[test]
fn test_factory_reset_restores_target() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["target", "set", "9"]);
    let out = run_ok(home.path(), &["reset", "factory", "--yes"]);
    assert!(out.contains("Complete factory reset successful!"));
    assert_eq!(run_ok(home.path(), &["target", "get"]).trim(), "15");
}

#[test]
fn test_export_report_to_dir() {
    let home = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["save", "--distance", "4", "--electricity", "2"]);

    let (code, _, stderr) = run_cli(
        home.path(),
        &["export", "report", "--out", out_dir.path().to_str().unwrap()],
    );
    assert_eq!(code, 0, "{stderr}");
    assert!(stderr.contains("Text report downloaded!"));

    let files: Vec<_> = std::fs::read_dir(out_dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
    let path = files[0].as_ref().unwrap().path();
    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("EcoTrack-Report-") && name.ends_with(".txt"));

    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("=== ECOTRACK CARBON FOOTPRINT REPORT ==="));
    assert!(text.contains("RECENT HISTORY:"));
}

#[test]
fn test_export_report_missing_dir_fails() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope");
    let (code, _, stderr) = run_cli(
        home.path(),
        &["export", "report", "--out", missing.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Export failed - please try again"));
}

#[test]
fn test_export_summary_to_stdout() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(home.path(), &["export", "summary"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("=== ECOTRACK REPORT ("));
    assert!(stderr.contains("Copied to clipboard!"));
}

#[test]
fn test_config_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(
        run_ok(home.path(), &["config", "get", "tracking.history_display_limit"]).trim(),
        "5"
    );

    run_ok(home.path(), &["config", "set", "tracking.history_display_limit", "7"]);
    assert_eq!(
        run_ok(home.path(), &["config", "get", "tracking.history_display_limit"]).trim(),
        "7"
    );

    let (code, _, _) = run_cli(home.path(), &["config", "set", "tracking.history_display_limit", "99"]);
    assert_eq!(code, 1);

    let list = run_ok(home.path(), &["config", "list"]);
    assert!(list.contains("placeholders.seed = null"));

    run_ok(home.path(), &["config", "reset"]);
    assert_eq!(
        run_ok(home.path(), &["config", "get", "tracking.history_display_limit"]).trim(),
        "5"
    );
}

#[test]
fn test_seeded_placeholders_are_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    for home in [a.path(), b.path()] {
        run_ok(home, &["config", "set", "placeholders.seed", "42"]);
    }
    assert_eq!(
        run_ok(a.path(), &["week", "--json"]),
        run_ok(b.path(), &["week", "--json"])
    );
}

#[test]
fn test_oversized_seed_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        home.path(),
        &["config", "set", "placeholders.seed", "18446744073709551615"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("placeholders.seed"));

    // The stored config is still readable afterwards.
    assert_eq!(
        run_ok(home.path(), &["config", "get", "placeholders.seed"]).trim(),
        "null"
    );
    run_ok(home.path(), &["week", "--json"]);
}
