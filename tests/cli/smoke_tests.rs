// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_code_counter"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code_counter"))
        .stdout(predicate::str::contains("--by-suffix"));
}

#[test]
fn reads_stdin() {
    bin()
        .args(["--format", "json"])
        .write_stdin("x = 1\ny = 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""code":2"#))
        .stdout(predicate::str::contains(r#""remark":0"#));
}

#[test]
fn processes_file_by_suffix() {
    let ws = TempWorkspace::new("smoke");
    let path = ws.create_file("q.sql", "-- note\nSELECT 1;\n");

    bin()
        .args(["--by-suffix", "--format", "rows"])
        .arg(&path)
        .assert()
        .success()
        .stdout("language,code,blank,inline,block,remark\nsql,1,0,1,0,1\n");
}

#[test]
fn unknown_language_exits_with_failure() {
    bin()
        .args(["--language", "cobol", "--text", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown language"));
}

#[test]
fn verbose_logs_each_line() {
    bin()
        .args(["--verbose", "--text", "# c\nx = 1"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("inline"))
        .stderr(predicate::str::contains("code"));
}
