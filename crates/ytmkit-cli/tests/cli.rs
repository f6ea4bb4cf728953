//! End-to-end tests for the `ytmkit` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const BOND_2023: [&str; 8] = [
    "--face",
    "1000",
    "--issue",
    "2023-01-01",
    "--maturity",
    "2027-01-01",
    "--coupon",
    "0.05",
];

const BOND_2022: [&str; 8] = [
    "--face",
    "1000",
    "--issue",
    "2022-01-01",
    "--maturity",
    "2027-01-01",
    "--coupon",
    "0.05",
];

fn ytmkit() -> Command {
    let mut cmd = Command::cargo_bin("ytmkit").unwrap();
    cmd.env_remove("YTMKIT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn schedule_minimal_lists_every_flow() {
    let output = ytmkit()
        .arg("schedule")
        .args(BOND_2022)
        .args(["--format", "minimal"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "2022-01-01 50.00");
    assert_eq!(lines[5], "2027-01-01 1050.00");
}

#[test]
fn schedule_table_shows_total() {
    ytmkit()
        .arg("schedule")
        .args(BOND_2022)
        .assert()
        .success()
        .stdout(predicate::str::contains("Coupon+Principal"))
        .stdout(predicate::str::contains("Total: 1300.00"));
}

#[test]
fn schedule_json_is_parseable() {
    let output = ytmkit()
        .arg("schedule")
        .args(BOND_2022)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let flows = value["cash_flows"].as_array().unwrap();
    assert_eq!(flows.len(), 6);
    assert_eq!(flows[5]["date"], "2027-01-01");
    assert_eq!(flows[5]["cf_type"], "CouponAndPrincipal");
}

#[test]
fn schedule_rejects_reversed_dates() {
    ytmkit()
        .args([
            "schedule",
            "--face",
            "1000",
            "--issue",
            "2027-01-01",
            "--maturity",
            "2022-01-01",
            "--coupon",
            "0.05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid schedule"));
}

#[test]
fn schedule_rejects_malformed_date() {
    ytmkit()
        .args([
            "schedule",
            "--face",
            "1000",
            "--issue",
            "01/01/2022",
            "--maturity",
            "2027-01-01",
            "--coupon",
            "0.05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--issue"));
}

#[test]
fn yield_minimal_matches_reference() {
    ytmkit()
        .arg("yield")
        .args(BOND_2023)
        .args(["--price", "950", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.08014752"));
}

#[test]
fn yield_json_reports_solver_details() {
    let output = ytmkit()
        .arg("yield")
        .args(BOND_2023)
        .args(["--price", "950", "--method", "newton", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ytm = value["yield_to_maturity"].as_f64().unwrap();
    assert!((ytm - 0.080_147_527_699_761_97).abs() < 1e-6);
    assert_eq!(value["method"], "newton");
    assert_eq!(value["isin"], "UNSPECIFIED");
}

#[test]
fn yield_rejects_negative_price() {
    ytmkit()
        .arg("yield")
        .args(BOND_2023)
        .args(["--price", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn yield_honours_config_file() {
    let file = config_file("[solver]\nmethod = \"newton\"\nmax_iterations = 1\n");

    ytmkit()
        .arg("yield")
        .args(BOND_2023)
        .args(["--price", "950"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to converge"));

    // Command-line flags win over the file
    ytmkit()
        .arg("yield")
        .args(BOND_2023)
        .args(["--price", "950", "--max-iterations", "100", "--format", "minimal"])
        .env("YTMKIT_CONFIG", file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.08014752"));
}

#[test]
fn invalid_config_is_reported() {
    let file = config_file("[solver]\ntol = 1e-6\n");

    ytmkit()
        .arg("yield")
        .args(BOND_2023)
        .args(["--price", "950"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn price_minimal_discounts_schedule() {
    ytmkit()
        .arg("price")
        .args(BOND_2022)
        .args(["--yield", "0.06", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1007.738091"));
}

#[test]
fn price_rejects_rate_at_minus_one() {
    ytmkit()
        .arg("price")
        .args(BOND_2022)
        .args(["--yield", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("discounting domain"));
}
