use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paycheck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paycheck").unwrap();
    cmd.env("PAYCHECK_DATA_DIR", dir.path())
        .env_remove("PAYCHECK_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn seed(dir: &TempDir) {
    paycheck(dir)
        .args(["account", "add", "Checking", "--balance", "2034.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added account: Checking"));
    paycheck(dir)
        .args([
            "bill", "add", "Rent", "--amount", "1550.99", "--due", "2025-11-01", "--category",
            "rent", "--status", "autopay", "--account", "Checking",
        ])
        .assert()
        .success();
    paycheck(dir)
        .args([
            "income", "add", "Salary", "--amount", "4300", "--due", "2025-10-25", "--account",
            "Checking",
        ])
        .assert()
        .success();
}

#[test]
fn test_survivor_report() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["report", "survivor", "--today", "2025-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.31"))
        .stdout(predicate::str::contains("63.9% margin"))
        .stdout(predicate::str::contains("You're Surviving"));
}

#[test]
fn test_close_out_report() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["report", "close-out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closing Balance:"))
        .stdout(predicate::str::contains("$2034.01 remaining"));
}

#[test]
fn test_paycheck_report_json() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["report", "paycheck", "--today", "2025-10-16", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"days_until_next\": 9"));
}

#[test]
fn test_list_commands() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL"))
        .stdout(predicate::str::contains("$2034.01"));
    paycheck(&dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    paycheck(&dir)
        .args(["account", "add", "Checking", "--balance", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error: balance"));

    paycheck(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));
}

#[test]
fn test_unknown_account_reference_warns() {
    let dir = TempDir::new().unwrap();

    paycheck(&dir)
        .args([
            "expense", "add", "Gas", "--amount", "45", "--account", "Chequing", "--date",
            "2025-10-15",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not match any known account"));
}

#[test]
fn test_reset_clears_session() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir).arg("reset").assert().success();
    paycheck(&dir)
        .args(["report", "close-out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No paycheck scheduled"));
}

#[test]
fn test_show_commands() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["account", "show", "checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: Checking"))
        .stdout(predicate::str::contains("$2034.01"));
    paycheck(&dir)
        .args(["bill", "show", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(day 1)"))
        .stdout(predicate::str::contains("Autopay"));
    paycheck(&dir)
        .args(["bill", "show", "Water"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_duplicate_account_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["account", "add", "CHECKING", "--balance", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    paycheck(&dir)
        .args(["account", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be unique"));
}

#[test]
fn test_list_summaries() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    paycheck(&dir)
        .args(["income", "list", "--today", "2025-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next income: Salary"))
        .stdout(predicate::str::contains("(9 days)"));

    paycheck(&dir)
        .args([
            "expense", "add", "Groceries", "--amount", "66", "--account", "Checking", "--date",
            "2025-10-14",
        ])
        .assert()
        .success();
    paycheck(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coasted by account:"))
        .stdout(predicate::str::contains("Checking: $66.00"));
}
