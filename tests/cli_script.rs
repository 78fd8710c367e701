use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bank_core_cli").unwrap();
    cmd.env("BANK_CORE_CLI_SCRIPT", "1")
        .env("BANK_CORE_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_full_flow() {
    let home = tempdir().unwrap();
    let input = "3\n111\nAna Souza\n17/05/1990\nRua A, 10\n\
                 4\n111\n\
                 0\n111\n100\n\
                 1\n111\n150\n\
                 2\n111\n\
                 5\n";

    script_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Customer registered."))
        .stdout(contains("Checking account opened: Branch 0001 / C/C 1"))
        .stdout(contains("Deposit of R$ 100.00 completed."))
        .stdout(contains("Insufficient funds"))
        .stdout(contains("=== STATEMENT ==="))
        .stdout(contains("Balance: R$ 100.00"));
}

#[test]
fn script_mode_reports_unknown_customer() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("0\n999\n2\n999\n5\n")
        .assert()
        .success()
        .stdout(contains("Customer not found: 999"))
        .stdout(contains("Deposit of").not());
}

#[test]
fn script_mode_uses_configured_branch_and_symbol() {
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "branch_code": "0777", "currency_symbol": "$" }"#,
    )
    .unwrap();

    script_command(home.path())
        .write_stdin("3\n1\nBia\n01/02/1990\nRua B\n4\n1\n0\n1\n12,5\n5\n")
        .assert()
        .success()
        .stdout(contains("Branch 0777 / C/C 1"))
        .stdout(contains("Deposit of $ 12.50 completed."));
}
