mod common;

use assert_cmd::Command;
use common::temp_base;
use predicates::prelude::*;
use predicates::str::contains;

fn shell(base: &std::path::Path) -> Command {
    std::fs::write(base.join("config.json"), r#"{"color_enabled": false}"#).unwrap();
    let mut cmd = Command::cargo_bin("moneymind").unwrap();
    cmd.env("MONEYMIND_HOME", base)
        .env("MONEYMIND_CLI_SCRIPT", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let base = temp_base();
    let input = "add \"Weekly shop\" 82.40 Groceries\n\
                 add Concert 60 entertainment front row\n\
                 add Lunch\n\
                 summary\n\
                 budget needs=60\n\
                 exit\n";

    shell(&base)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("SUCCESS: [+] Expense added successfully!"))
        .stdout(contains("ERROR: [x] Please fill in all required fields!"))
        .stdout(contains("Essential Needs"))
        .stdout(contains("Budget updated!"));

    let blob = std::fs::read_to_string(base.join("store").join("smart-expense-tracker-data.json"))
        .expect("state blob written");
    assert!(blob.contains("\"Weekly shop\""));
    assert!(blob.contains("\"needsPercentage\":60.0"));
    assert!(blob.contains("\"description\":\"front row\""));
}

#[test]
fn state_is_restored_between_runs() {
    let base = temp_base();
    shell(&base)
        .write_stdin("add Rent 1600 Rent\n")
        .assert()
        .success();

    shell(&base)
        .write_stdin("list\nadvice\n")
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Transactions: 1"))
        .stdout(contains("You're overspending on needs!"));
}

#[test]
fn typos_get_suggestions() {
    let base = temp_base();
    shell(&base)
        .write_stdin("sumary\nadd Gift 20 Shoping\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"))
        .stdout(contains("unknown category: Shoping"))
        .stdout(contains("Suggestion: `Shopping`?"));
}

#[test]
fn bad_arguments_are_reported_and_the_shell_continues() {
    let base = temp_base();
    shell(&base)
        .write_stdin("budget needs=lots\ncategories\n")
        .assert()
        .success()
        .stdout(contains("`needs` needs a number"))
        .stdout(contains("Use `help <command>` for usage details."))
        .stdout(contains("Dining Out"))
        .stdout(contains("Budget updated!").not());
}
