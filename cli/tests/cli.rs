use assert_cmd::Command;
use predicates::prelude::*;

fn phonebook() -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("PHONEBOOK_ENTRIES")
        .env_remove("PHONEBOOK_NO_SAMPLE")
        .env_remove("PHONEBOOK_REVERSE_INDEX");
    cmd
}

#[test]
fn lookup_by_name_is_case_insensitive() {
    phonebook()
        .args(["name", "FFFfF"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fffff, 343434343, Other"))
        .stdout(predicate::str::contains("fffff, 232323232, Other"))
        .stdout(predicate::str::contains("fffff, 666666666, Other"));
}

#[test]
fn invalid_type_is_reported_on_stderr_and_skipped() {
    phonebook()
        .args(["--no-sample", "-e", "Sam,789-897-778,home", "-e", "Sam,789-897-778,4"])
        .arg("dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1. sam, 789-897-778, Home ]"))
        .stdout(predicate::str::contains("[2.").not())
        .stderr(predicate::str::contains("Error specifying phone type"));
}

#[test]
fn malformed_entry_fails() {
    phonebook()
        .args(["-e", "nobody", "dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed entry"));
}

#[test]
fn entries_from_environment() {
    phonebook()
        .env("PHONEBOOK_ENTRIES", "Ann,555;Bob,555,cell")
        .args(["--no-sample", "number", "555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ann, 555, Home"))
        .stdout(predicate::str::contains("bob, 555, Cellular"));
}

#[test]
fn trailing_separator_in_environment_entries_is_ignored() {
    phonebook()
        .env("PHONEBOOK_ENTRIES", "Ann,555;")
        .args(["--no-sample", "dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1. ann, 555, Home ]"));
}

#[test]
fn json_output_is_one_object_per_line() {
    let output = phonebook()
        .args(["--json", "--reverse-index", "number", "111111111"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["query"], "111111111");
            value["name"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(names, vec!["a1a1a", "aaaaa", "hello"]);
}

#[test]
fn demo_rejects_out_of_range_type() {
    phonebook()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Printing records with name: \"CCCcC\""))
        .stdout(predicate::str::contains("ccccc, 333333333, Cellular"))
        .stderr(predicate::str::contains("Error specifying phone type"));
}
