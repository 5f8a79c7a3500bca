use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("jslt-lite").unwrap()
}

#[test]
fn transforms_stdin_to_stdout() {
    cli()
        .arg(".name")
        .write_stdin(r#"{"name": "ada"}"#)
        .assert()
        .success()
        .stdout("\"ada\"\n");
}

#[test]
fn constructs_objects() {
    cli()
        .arg(r#"{ "n": .n, "big": .n > 3 }"#)
        .write_stdin(r#"{"n": 5}"#)
        .assert()
        .success()
        .stdout("{\"n\":5,\"big\":true}\n");
}

#[test]
fn pretty_prints_on_request() {
    let assert = cli()
        .args(["--pretty", r#"{ "a": .a }"#])
        .write_stdin(r#"{"a": [1, 2]}"#)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, serde_json::json!({"a": [1, 2]}));
    assert!(stdout.contains('\n'));
}

#[test]
fn reads_and_writes_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, r#"{"xs": [1, 2, 3]}"#).unwrap();

    cli()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "size(.xs)",
        ])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(output).unwrap(), "3\n");
}

#[test]
fn reads_the_program_from_a_file() {
    let dir = tempdir().unwrap();
    let program = dir.path().join("program.jslt");
    fs::write(&program, "let a = .x\nlet b = 2\n{ \"sum\": $a + $b }").unwrap();

    cli()
        .args(["-f", program.to_str().unwrap()])
        .write_stdin(r#"{"x": 1}"#)
        .assert()
        .success()
        .stdout("{\"sum\":3}\n");
}

#[test]
fn validate_reports_success() {
    cli()
        .args(["--validate", ".a.b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn validate_failure_exits_nonzero_with_hints() {
    cli()
        .args(["--validate", "foo(.x)"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown function: foo"))
        .stdout(predicate::str::contains("Available functions"));
}

#[test]
fn evaluation_failure_exits_nonzero() {
    cli()
        .arg("$nope")
        .write_stdin("{}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Undefined variable: $nope"));
}

#[test]
fn rejects_non_object_input() {
    cli()
        .arg(".")
        .write_stdin("[1, 2]")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn requires_a_program() {
    cli()
        .write_stdin("{}")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing PROGRAM"));
}

#[test]
fn lists_builtin_functions() {
    cli()
        .arg("--functions")
        .assert()
        .success()
        .stdout(predicate::str::contains("size()"))
        .stdout(predicate::str::contains("round()"));
}
