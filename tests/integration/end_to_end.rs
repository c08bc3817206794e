// tests/integration/end_to_end.rs
use std::io::Cursor;

use clap::Parser;
use code_counter::{app, cli::Args};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn run_with_stdin(argv: &[&str], stdin: &str) -> code_counter_shared_kernel::Result<String> {
    let args = Args::try_parse_from(std::iter::once("code_counter").chain(argv.iter().copied()))
        .expect("valid arguments");
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    app::run(&args, &mut input, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn run(argv: &[&str]) -> code_counter_shared_kernel::Result<String> {
    run_with_stdin(argv, "")
}

fn json(output: &str) -> Value {
    serde_json::from_str(output.trim()).expect("valid JSON")
}

#[test]
fn classifies_literal_text() {
    let out = run(&["--format", "json", "--text", "\n# comment\nx = 1\n"]).unwrap();
    assert_eq!(
        json(&out),
        serde_json::json!({"language": "python", "code": 1, "blank": 1, "inline": 1, "block": 0, "remark": 1})
    );
}

#[test]
fn classifies_stdin_when_no_inputs() {
    let out = run_with_stdin(&["--format", "json", "-l", "js"], "/* start\nmiddle\nend */\nvar x = 1;\n").unwrap();
    let value = json(&out);
    assert_eq!(value["language"], "javascript");
    assert_eq!(value["block"], 3);
    assert_eq!(value["code"], 1);
}

#[test]
fn selects_language_by_suffix() {
    let ws = TempWorkspace::new("suffix");
    let path = ws.create_file("query.sql", "-- note\nSELECT 1;\n");

    let out = run(&["--format", "json", "--by-suffix", path.to_str().unwrap()]).unwrap();
    assert_eq!(
        json(&out),
        serde_json::json!({"language": "sql", "code": 1, "blank": 0, "inline": 1, "block": 0, "remark": 1})
    );
}

#[test]
fn unknown_language_fails_without_output() {
    let err = run(&["--language", "cobol", "--text", "x"]).unwrap_err();
    assert!(err.is_unknown_language());
    assert!(err.to_string().contains("cobol"));
}

#[test]
fn missing_file_is_reported() {
    let err = run(&["/definitely/missing/file.py"]).unwrap_err();
    assert!(err.to_string().contains("classifying /definitely/missing/file.py"));
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn cumulative_prints_single_report() {
    let ws = TempWorkspace::new("cumulative");
    let a = ws.create_file("a.py", "x = 1\n# c\n");
    let b = ws.create_file("b.py", "\ny = 2\n");

    let out = run(&["--format", "json", "--cumulative", a.to_str().unwrap(), b.to_str().unwrap()]).unwrap();
    assert_eq!(out.lines().count(), 1);
    let value = json(&out);
    assert_eq!(value["code"], 2);
    assert_eq!(value["blank"], 1);
    assert_eq!(value["remark"], 1);
}

#[test]
fn total_adds_a_labelled_report() {
    let ws = TempWorkspace::new("total");
    let a = ws.create_file("a.js", "// c\nf();\n");
    let b = ws.create_file("b.sql", "SELECT 1;\n");

    let out = run(&["--by-suffix", "--total", a.to_str().unwrap(), b.to_str().unwrap()]).unwrap();
    assert!(out.contains(&format!("==> {} <==\nlanguage javascript", a.display())));
    assert!(out.contains(&format!("==> {} <==\nlanguage sql", b.display())));
    assert!(out.contains("==> total <==\nlanguage mixed\ncode     2"));
}

#[test]
fn total_of_mixed_languages_is_not_labelled_as_the_first_file() {
    let ws = TempWorkspace::new("total-json");
    let py = ws.create_file("a.py", "# c\nx = 1\n");
    let sql = ws.create_file("b.sql", "SELECT 1;\n");

    let out = run(&["--by-suffix", "--total", "--format", "json", py.to_str().unwrap(), sql.to_str().unwrap()]).unwrap();
    let lines: Vec<Value> = out.lines().map(json).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["language"], "python");
    assert_eq!(lines[1]["language"], "sql");
    assert_eq!(
        lines[2],
        serde_json::json!({"language": "mixed", "code": 2, "blank": 0, "inline": 1, "block": 0, "remark": 1})
    );

    let rows = run(&["--by-suffix", "--total", "--format", "rows", py.to_str().unwrap(), sql.to_str().unwrap()]).unwrap();
    assert_eq!(rows.lines().last(), Some("mixed,2,0,1,0,1"));
}

#[test]
fn extra_language_definitions_are_usable() {
    let ws = TempWorkspace::new("languages");
    let defs = ws.create_file(
        "langs.json",
        r#"[{ "name": "lua", "alias": "lua", "suffix": "lua", "inline_marker": "--",
             "block_markers": [{ "start": "--[[", "end": "]]" }] }]"#,
    );
    let script = ws.create_file("init.lua", "--[[\nheader\n]]\nlocal x = 1\n-- done\n");

    let out = run(&[
        "--languages",
        defs.to_str().unwrap(),
        "--by-suffix",
        "--format",
        "json",
        script.to_str().unwrap(),
    ])
    .unwrap();
    let value = json(&out);
    assert_eq!(value["language"], "lua");
    // `--[[` は行コメント記号 `--` で始まるため、行コメントとして数えられる
    assert_eq!(value["inline"], 2);
    assert_eq!(value["code"], 3);
}

#[test]
fn block_first_changes_precedence() {
    let source = "/*\n// inside\n*/\n";
    let default = json(&run(&["-l", "js", "--format", "json", "--text", source]).unwrap());
    assert_eq!(default["inline"], 1);
    assert_eq!(default["block"], 2);

    let block_first = json(&run(&["-l", "js", "--format", "json", "--block-first", "--text", source]).unwrap());
    assert_eq!(block_first["inline"], 0);
    assert_eq!(block_first["block"], 3);
}

#[test]
fn keep_same_line_open_reproduces_literal_scan() {
    let source = "/* note */\nvar x = 1;\n";
    let closed = json(&run(&["-l", "js", "--format", "json", "--text", source]).unwrap());
    assert_eq!(closed["code"], 1);

    let open = json(&run(&["-l", "js", "--format", "json", "--keep-same-line-open", "--text", source]).unwrap());
    assert_eq!(open["code"], 0);
    assert_eq!(open["block"], 2);
}
