//! Integration tests for the expense CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let data_dir = TempDir::new().unwrap();
    expense(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_export_demo_report_csv() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = data_dir.path().join("out");

    expense(&data_dir)
        .args(["report", "export", "--period", "6months", "--format", "csv"])
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("expense-report-6months.csv"));

    let content = fs::read_to_string(out_dir.join("expense-report-6months.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Expense Report");
    assert_eq!(lines[1], "Period: 6months");
    assert!(lines.contains(&"Monthly Spending Trend"));
    assert!(lines.contains(&"Month,Spent,Budget,Variance"));
    assert!(lines.contains(&"Jan,$1200.00,$1500.00,$-300.00"));
    assert!(lines.contains(&"Food & Dining,$450.00,32%"));
    assert!(lines.contains(&"Week 1,$280.00"));
    assert!(!content.contains("Great job!"));
}

#[test]
fn test_export_pdf_to_default_directory() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["report", "export"])
        .assert()
        .success();

    let pdf = data_dir
        .path()
        .join("exports")
        .join("expense-report-6months.pdf");
    let bytes = fs::read(pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[test]
fn test_export_rejects_path_like_period() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["report", "export", "--period", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used in a file name"));
}

#[test]
fn test_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "45.50", "food", "--date", "2024-07-01"])
        .args(["--description", "Lunch with colleagues"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    expense(&data_dir)
        .args(["list", "--search", "LUNCH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$45.50"))
        .stdout(predicate::str::contains("Lunch with colleagues"));

    expense(&data_dir)
        .args(["list", "--category", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_add_rejects_non_positive_amount() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "0", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    expense(&data_dir)
        .args(["add", "-12", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));
}

#[test]
fn test_demo_seed_and_stats() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["--demo", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 8 demo expenses"))
        .stdout(predicate::str::contains("$740.99"));

    expense(&data_dir)
        .args(["--demo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 8 demo expenses").not())
        .stdout(predicate::str::contains("8 expense(s)"));
}

#[test]
fn test_import_csv() {
    let data_dir = TempDir::new().unwrap();
    let csv = data_dir.path().join("import.csv");
    fs::write(
        &csv,
        "date,amount,category,description\n\
         2024-06-25,200,Healthcare,Dentist\n\
         2024-06-26,abc,Food,Broken row\n",
    )
    .unwrap();

    expense(&data_dir)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expense(s)"))
        .stdout(predicate::str::contains("row 2: Invalid amount 'abc'"));
}

#[test]
fn test_prefs_set_and_show() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["prefs", "set", "theme", "dark"])
        .assert()
        .success();

    expense(&data_dir)
        .args(["prefs", "theme", "forest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forest Green"));

    expense(&data_dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"))
        .stdout(predicate::str::contains("Forest Green"));

    let stored = fs::read_to_string(data_dir.path().join("preferences.json")).unwrap();
    assert!(stored.contains("\"theme\": \"dark\""));

    expense(&data_dir)
        .args(["prefs", "set", "theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown value 'neon' for theme"));
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("6months"));

    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn test_profile_set_notify_and_show() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("john@example.com"));

    expense(&data_dir)
        .args(["profile", "set", "--name", "Jane Smith", "--email", "jane@example.com"])
        .assert()
        .success();

    expense(&data_dir)
        .args(["profile", "notify", "weekly-reports", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly reports turned on"));

    expense(&data_dir)
        .args(["--demo", "profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("$740.99 (8 recorded)"))
        .stdout(predicate::str::contains("Weekly reports         on"));

    let stored = fs::read_to_string(data_dir.path().join("preferences.json")).unwrap();
    assert!(stored.contains("\"user\""));

    expense(&data_dir)
        .args(["profile", "set", "--email", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid email address"));
}
