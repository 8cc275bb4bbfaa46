use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn equipfin() -> Command {
    let mut cmd = Command::cargo_bin("equipfin").unwrap();
    cmd.write_stdin("");
    cmd
}

#[test]
fn test_annuity_from_flags() {
    equipfin()
        .args(["annuity", "--principal", "2000000", "--rate", "18", "--term", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"monthly_payment\": \"99848.2039"))
        .stdout(predicate::str::contains("\"schedule\""));
}

#[test]
fn test_annuity_from_stdin() {
    Command::cargo_bin("equipfin")
        .unwrap()
        .args(["annuity", "--output", "minimal"])
        .write_stdin(r#"{"principal": 120000, "annual_rate_percent": 0, "term_months": 12}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("10000"));
}

#[test]
fn test_annuity_rejects_zero_principal() {
    equipfin()
        .args(["annuity", "--principal", "0", "--rate", "18", "--term", "24"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input: principal"));
}

#[test]
fn test_annuity_rejects_negative_rate() {
    equipfin()
        .args(["annuity", "--principal", "1000", "--rate", "-5", "--term", "24"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("annual_rate_percent"));
}

#[test]
fn test_annuity_without_input_fails() {
    equipfin().arg("annuity").assert().code(1);
}

#[test]
fn test_installment_csv() {
    equipfin()
        .args(["installment", "--price", "120000", "--term", "6", "--output", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("period"))
        .stdout(predicate::str::contains("20000"))
        .stdout(predicate::str::contains("total_paid").not());
}

#[test]
fn test_leasing_quote_defaults() {
    equipfin()
        .args(["leasing", "--price", "1000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"down_payment\": \"300000\""))
        .stdout(predicate::str::contains("\"financed_amount\": \"700000\""))
        .stdout(predicate::str::contains("Annuity leasing"));
}

#[test]
fn test_leasing_down_payment_covers_price() {
    equipfin()
        .args(["leasing", "--price", "500000", "--down-payment", "500000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing left to finance"));
}

#[test]
fn test_installment_plan_table() {
    equipfin()
        .args([
            "installment-plan",
            "--price",
            "90000",
            "--term",
            "3",
            "--start-date",
            "2026-10-17",
            "--output",
            "table",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-11-16"))
        .stdout(predicate::str::contains("payments:"));
}

#[test]
fn test_plans_with_yaml_config() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "default_annual_rate_percent: 21").unwrap();
    writeln!(file, "leasing_terms: [12, 24]").unwrap();

    equipfin()
        .args(["plans", "--config", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_annual_rate_percent\": \"21\""))
        .stdout(predicate::str::contains("\"installment_terms\""));
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"leasing_terms": []}}"#).unwrap();

    equipfin()
        .args(["plans", "--config", file.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid financing config"));
}

#[test]
fn test_version() {
    equipfin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("equipfin "));
}
