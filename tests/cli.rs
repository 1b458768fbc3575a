use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

fn add(data_dir: &TempDir, amount: &str, category: &str, date: &str) {
    expense(data_dir)
        .args(["add", amount, category, "--date", date])
        .assert()
        .success();
}

#[test]
fn test_add_reports_budget_percentage() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "104", "clothes", "--date", "2025-10-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("208% of the budget for clothes"))
        .stdout(predicate::str::contains("Expense added successfully!"));

    assert!(dir.path().join("tracker.json").exists());
}

#[test]
fn test_saved_document_format() {
    let dir = TempDir::new().unwrap();
    add(&dir, "5", "food", "2025-10-04");

    let contents = std::fs::read_to_string(dir.path().join("tracker.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "expenses": [{ "amount": 5, "category": "food", "date": "2025-10-04" }]
        })
    );
}

#[test]
fn test_daily_total_over_limit() {
    let dir = TempDir::new().unwrap();
    for _ in 0..3 {
        add(&dir, "15", "food", "2025-10-04");
    }

    expense(&dir)
        .args(["daily", "2025-10-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeded your daily limit"))
        .stdout(predicate::str::contains("Total for 2025-10-04: $45"));
}

#[test]
fn test_monthly_summary() {
    let dir = TempDir::new().unwrap();
    add(&dir, "5", "food", "2025-10-04");
    add(&dir, "15", "clothes", "2025-10-04");
    add(&dir, "10", "fun", "2025-11-05");
    add(&dir, "900", "fun", "2025-11-06");

    expense(&dir)
        .args(["summary", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent this month:    $910"))
        .stdout(predicate::str::contains("Day with highest spending: 2025-11-06"))
        .stdout(predicate::str::contains("Most spent category:       fun"));

    expense(&dir)
        .args(["summary", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses this month"));
}

#[test]
fn test_monthly_rejects_invalid_month() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["monthly", "13"]).assert().failure();
}

#[test]
fn test_list_empty_and_populated() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));

    add(&dir, "20", "fun", "2025-10-04");

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-10-04"))
        .stdout(predicate::str::contains("25%"));
}

#[test]
fn test_show_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_malformed_document_fails_without_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tracker.json");
    std::fs::write(&path, r#"{"items": []}"#).unwrap();

    expense(&dir)
        .args(["add", "5", "food", "--date", "2025-10-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"items": []}"#);
}

#[test]
fn test_activity_journal() {
    let dir = TempDir::new().unwrap();
    add(&dir, "5", "food", "2025-10-04");

    expense(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added to expenseTracker"))
        .stdout(predicate::str::contains("Saved expenses to file"));
}

#[test]
fn test_show_log_at_exit() {
    let dir = TempDir::new().unwrap();
    add(&dir, "5", "food", "2025-10-04");

    expense(&dir)
        .args(["--show-log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Activity log:"))
        .stdout(predicate::str::contains("Loaded expenses from file"));
}

#[test]
fn test_custom_budget_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"budget": {"daily_limit": 100}}"#,
    )
    .unwrap();
    for _ in 0..3 {
        add(&dir, "15", "food", "2025-10-04");
    }

    expense(&dir)
        .args(["daily", "2025-10-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("within your daily limit"));
}

#[test]
fn test_config_and_log_ignore_malformed_document() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tracker.json"), "{\"expenses\": [").unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily limit:   30"));

    expense(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity recorded yet."));

    expense(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));
}

#[test]
fn test_config_init_writes_editable_settings() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["budget"]["daily_limit"], 30);
    assert_eq!(json["budget"]["references"]["fun"], 80);

    json["budget"]["monthly_limit"] = serde_json::json!(10);
    std::fs::write(dir.path().join("config.json"), json.to_string()).unwrap();
    add(&dir, "15", "food", "2025-10-04");

    expense(&dir)
        .args(["monthly", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeded your monthly limit"));
}
