use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path())
        .current_dir(data_dir.path());
    cmd
}

fn add(data_dir: &TempDir, args: &[&str]) {
    fintrack(data_dir).arg("add").args(args).assert().success();
}

fn read_data_file(data_dir: &TempDir) -> serde_json::Value {
    let contents = std::fs::read_to_string(data_dir.path().join("financial_data.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn add_and_list() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "Rent", "1200", "--date", "01-10-2024", "--due", "2024-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan record added"));

    fintrack(&dir)
        .args(["add", "Allowance", "5000", "--kind", "allowance", "--date", "2024-01-01"])
        .assert()
        .success();

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("-₱1,200.00"))
        .stdout(predicate::str::contains("₱5,000.00"))
        .stdout(predicate::str::contains("2024-02-01"));

    let data = read_data_file(&dir);
    assert_eq!(data["plans"][0]["date"], "2024-01-10");
    assert_eq!(data["plans"][0]["record_type"], "expense");
    assert_eq!(data["plans"][1]["record_type"], "income");
    assert_eq!(data["plans"][1]["due_date"], serde_json::Value::Null);
    assert_eq!(data["trash_bin"].as_array().unwrap().len(), 0);
}

#[test]
fn empty_list() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to display."));
}

#[test]
fn add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "Rent", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    fintrack(&dir)
        .args(["add", "Rent", "100", "--kind", "saving"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record type"));

    fintrack(&dir)
        .args(["add", "Allowance", "100", "--kind", "allowance", "--due", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Due dates only apply to plans"));

    assert!(!dir.path().join("financial_data.json").exists());
}

#[test]
fn delete_restore_and_empty() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Allowance", "1000", "--kind", "allowance"]);
    add(&dir, &["Lunch", "150"]);
    add(&dir, &["Taxi", "200"]);

    fintrack(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved to trash bin"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Remaining balance: ₱800.00"));

    fintrack(&dir)
        .args(["trash", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));

    fintrack(&dir)
        .args(["trash", "restore", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored: Lunch"));

    let data = read_data_file(&dir);
    assert_eq!(data["plans"][2]["description"], "Lunch");
    assert_eq!(data["trash_bin"].as_array().unwrap().len(), 0);

    fintrack(&dir).args(["delete", "3"]).assert().success();
    fintrack(&dir)
        .args(["trash", "empty", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s) deleted"));

    fintrack(&dir)
        .args(["list", "--trash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to display."));
}

#[test]
fn delete_zero_cancels() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Lunch", "150"]);

    fintrack(&dir)
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    assert_eq!(read_data_file(&dir)["plans"].as_array().unwrap().len(), 1);
}

#[test]
fn delete_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Lunch", "150"]);

    fintrack(&dir)
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 1"));

    assert_eq!(read_data_file(&dir)["plans"].as_array().unwrap().len(), 1);
}

#[test]
fn empty_trash_without_confirmation_aborts() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Lunch", "150"]);
    fintrack(&dir).args(["delete", "1"]).assert().success();

    fintrack(&dir)
        .args(["trash", "empty"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    assert_eq!(read_data_file(&dir)["trash_bin"].as_array().unwrap().len(), 1);
}

#[test]
fn balance_and_due() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Allowance", "100", "--kind", "allowance"]);
    add(&dir, &["Phone", "40", "--due", "2024-05-01"]);
    add(&dir, &["Water", "10", "--due", "2024-01-10"]);

    fintrack(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("₱50.00"))
        .stdout(predicate::str::contains("Good. Save more!"));

    let output = fintrack(&dir).arg("due").assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output).unwrap();
    let water = output.find("Water").unwrap();
    let phone = output.find("Phone").unwrap();
    assert!(water < phone);
    assert!(!output.contains("Allowance"));
}

#[test]
fn deficit_balance() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Tuition", "100"]);

    fintrack(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT!!! YOU'RE OUT OF BALANCE!!!"));
}

#[test]
fn export_formats() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Books", "350"]);

    let json_path = dir.path().join("out.json");
    fintrack(&dir)
        .args(["export", "--output"])
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported to"));
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(exported["plans"][0]["description"], "Books");
    assert_eq!(exported["metadata"]["plan_count"], 1);

    let csv_path = dir.path().join("out.csv");
    fintrack(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&csv_path)
        .assert()
        .success();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("collection,date,description,amount,due_date,record_type"));
    assert!(csv.contains("plans,"));

    fintrack(&dir)
        .args(["export", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("financial_data_export_"));
}

#[test]
fn export_refuses_aliased_data_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Rent", "100"]);

    let alias = dir.path().join("sub").join("..").join("financial_data.json");
    fintrack(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&alias)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite the data file"));

    fintrack(&dir)
        .args(["export", "--format", "yaml", "--output", "financial_data.json"])
        .assert()
        .failure();

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn malformed_file_fails_unless_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("financial_data.json"),
        r#"{"plans": [
            {"date": "2024-01-01", "description": "Good", "amount": 10.0},
            {"date": "01/02/2024", "description": "Bad", "amount": 5.0}
        ]}"#,
    )
    .unwrap();

    fintrack(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Persistence error"));

    fintrack(&dir)
        .args(["list", "--skip-malformed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good"))
        .stderr(predicate::str::contains("Warning: skipped"));
}

#[test]
fn history_records_mutations() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Lunch", "150"]);
    fintrack(&dir).args(["delete", "1"]).assert().success();

    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD Lunch"))
        .stdout(predicate::str::contains("TRASH #1 Lunch"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("financial_data.json"))
        .stdout(predicate::str::contains("MM-DD-YYYY"));
}

#[test]
fn menu_exits_on_eof() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("PERSONAL FINANCE TRACKER"));
}

#[test]
fn menu_adds_record() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("menu")
        .write_stdin("1\nplan\n03-15-2024\nGroceries\n75.50\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan record added successfully!"));

    let data = read_data_file(&dir);
    assert_eq!(data["plans"][0]["description"], "Groceries");
    assert_eq!(data["plans"][0]["amount"], 75.5);
    assert_eq!(data["plans"][0]["date"], "2024-03-15");
}
