//! Integration tests for CLI argument handling
//!
//! Tests argument validation and the `--json` snapshot mode by running the
//! binary; the TUI itself is covered by unit tests.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str], log_dir: &Path) -> std::process::Output {
    let log_file = log_dir.join("aqitrend.log");
    Command::new(env!("CARGO_BIN_EXE_aqitrend"))
        .args(args)
        .arg("--log-file")
        .arg(&log_file)
        .output()
        .expect("Failed to execute aqitrend")
}

/// Runs `--json` with the given extra args and parses stdout
fn run_json(args: &[&str]) -> serde_json::Value {
    let dir = TempDir::new().unwrap();
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_cli(&full, dir.path());
    assert!(
        output.status.success(),
        "--json failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_help_flag_exits_successfully() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], dir.path());
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aqitrend"), "Help should mention aqitrend");
    assert!(stdout.contains("--city"), "Help should mention --city");
    assert!(stdout.contains("--range"), "Help should mention --range");
}

#[test]
fn test_invalid_city_prints_error_and_exits() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--city", "atlantis", "--json"], dir.path());
    assert!(!output.status.success(), "Expected invalid city to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid city") && stderr.contains("atlantis"),
        "Should print error message about invalid city: {}",
        stderr
    );
}

#[test]
fn test_invalid_range_prints_error_and_exits() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--range", "90", "--json"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid range"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_seed_is_rejected_by_clap() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--seed", "not-a-number", "--json"], dir.path());
    assert!(!output.status.success());
}

#[test]
fn test_json_snapshot_shape() {
    let report = run_json(&["--city", "mumbai", "--range", "14", "--seed", "7"]);

    assert_eq!(report["city"]["id"], "mumbai");
    assert_eq!(report["range"], "fortnight");
    assert_eq!(report["samples"].as_array().unwrap().len(), 15);
    assert_eq!(report["weekly"].as_array().unwrap().len(), 7);
    assert_eq!(report["hourly"].as_array().unwrap().len(), 6);

    for sample in report["samples"].as_array().unwrap() {
        let aqi = sample["aqi"].as_u64().unwrap();
        assert!((10..=300).contains(&aqi), "aqi {} out of range", aqi);
    }

    let direction = report["analysis"]["direction"].as_str().unwrap();
    assert!(["increasing", "decreasing", "stable"].contains(&direction));
}

#[test]
fn test_json_snapshot_is_reproducible_with_seed() {
    let a = run_json(&["--city", "delhi", "--seed", "123"]);
    let b = run_json(&["--city", "delhi", "--seed", "123"]);
    assert_eq!(a["samples"], b["samples"]);
    assert_eq!(a["summary"], b["summary"]);
    assert_eq!(a["weekly"], b["weekly"]);
}

#[test]
fn test_log_file_is_written() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--json", "--seed", "1"], dir.path());
    assert!(output.status.success());
    let log = std::fs::read_to_string(dir.path().join("aqitrend.log")).unwrap();
    assert!(log.contains("starting aqitrend"), "log was: {}", log);
}

/// Runs `--json --seed 1` with the given log filter and returns the log text
fn log_with_filter(filter: Option<&str>) -> String {
    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("aqitrend.log");
    let mut command = Command::new(env!("CARGO_BIN_EXE_aqitrend"));
    command
        .args(["--json", "--seed", "1", "--log-file"])
        .arg(&log_file);
    match filter {
        Some(filter) => command.env("AQITREND_LOG", filter),
        None => command.env_remove("AQITREND_LOG"),
    };
    let output = command.output().expect("Failed to execute aqitrend");
    assert!(output.status.success());
    std::fs::read_to_string(&log_file).unwrap()
}

#[test]
fn test_log_filter_from_environment() {
    let debug = log_with_filter(Some("debug"));
    assert!(
        debug.contains("regenerated trend report"),
        "debug log was: {}",
        debug
    );
    assert!(debug.contains("city=\"delhi\""), "debug log was: {}", debug);

    let default = log_with_filter(None);
    assert!(default.contains("starting aqitrend"), "log was: {}", default);
    assert!(
        !default.contains("regenerated trend report"),
        "info log should hide debug lines: {}",
        default
    );
}

#[test]
fn test_json_snapshot_includes_forecast() {
    let report = run_json(&["--city", "kolkata", "--seed", "5"]);
    let forecast = report["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 24);
    assert_eq!(forecast[0]["hour"], "01:00");
    assert_eq!(forecast[23]["hour"], "24:00");

    let latest = report["samples"].as_array().unwrap().last().unwrap()["aqi"]
        .as_i64()
        .unwrap();
    for entry in forecast {
        let aqi = entry["aqi"].as_i64().unwrap();
        assert!((latest - aqi).abs() <= 12, "forecast {} vs latest {}", aqi, latest);
        assert!(entry["category"].is_string());
    }
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use aqitrend::cli::{parse_city_arg, parse_range_arg, Cli, StartupConfig};
    use aqitrend::data::TimeRange;
    use aqitrend::tabs::Tab;
    use clap::Parser;

    #[test]
    fn test_cli_no_args_uses_defaults() {
        let cli = Cli::parse_from(["aqitrend"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.city.id, "delhi");
        assert_eq!(config.range, TimeRange::Week);
        assert_eq!(config.tab, Tab::Timeline);
    }

    #[test]
    fn test_cli_city_by_display_name() {
        let cli = Cli::parse_from(["aqitrend", "--city", "Hyderabad"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.city.id, "hyderabad");
    }

    #[test]
    fn test_parse_range_arg_names_and_days() {
        assert_eq!(parse_range_arg("week").unwrap(), TimeRange::Week);
        assert_eq!(parse_range_arg("14").unwrap(), TimeRange::Fortnight);
        assert!(parse_range_arg("").is_err());
    }

    #[test]
    fn test_parse_city_arg_invalid_returns_error() {
        assert!(parse_city_arg("invalid").is_err());
    }

    #[test]
    fn test_startup_config_from_cli_invalid_tab() {
        let cli = Cli::parse_from(["aqitrend", "--tab", "settings"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
