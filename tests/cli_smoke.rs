use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_subcommands() {
    Command::cargo_bin("postbox")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn view_rejects_a_non_numeric_id() {
    // Ids are parsed at the CLI boundary, before any lookup.
    Command::cargo_bin("postbox")
        .unwrap()
        .args(["view", "abc"])
        .assert()
        .failure();
}

#[test]
fn create_requires_title_and_body() {
    Command::cargo_bin("postbox")
        .unwrap()
        .args(["create", "only-a-title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BODY"));
}
