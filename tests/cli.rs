use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("crawlfetch").unwrap()
}

#[test]
fn help_lists_the_command_tree() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("fetch"))
        .stdout(contains("runs"))
        .stdout(contains("doctor"));
}

#[test]
fn fetch_requires_a_label() {
    cmd().arg("fetch").assert().failure().stderr(contains("LABEL"));
}

#[test]
fn version_flag_works() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("crawlfetch"));
}
