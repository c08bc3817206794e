// tests/integration/output_formats.rs
use std::io::Cursor;

use clap::Parser;
use code_counter::{app, cli::Args};

fn run(argv: &[&str]) -> String {
    let args = Args::try_parse_from(std::iter::once("code_counter").chain(argv.iter().copied()))
        .expect("valid arguments");
    let mut out = Vec::new();
    app::run(&args, &mut Cursor::new(Vec::new()), &mut out).expect("run succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

const SOURCE: &str = "'''\ndocstring\n'''\nx = 1\n";

#[test]
fn mapping_format() {
    let out = run(&["--text", SOURCE]);
    assert_eq!(
        out,
        "language python\ncode     1\nblank    0\ninline   0\nblock    3\nremark   3\n"
    );
}

#[test]
fn rows_format_with_delimiter() {
    let out = run(&["--format", "rows", "--delimiter", "\t", "--text", SOURCE]);
    assert_eq!(out, "language\tcode\tblank\tinline\tblock\tremark\npython\t1\t0\t0\t3\t3\n");
}

#[test]
fn json_format() {
    let out = run(&["--format", "json", "--text", SOURCE]);
    assert_eq!(
        out,
        "{\"language\":\"python\",\"code\":1,\"blank\":0,\"inline\":0,\"block\":3,\"remark\":3}\n"
    );
}

#[test]
fn yaml_format() {
    let out = run(&["--format", "yaml", "--text", SOURCE]);
    assert_eq!(out, "language: python\ncode: 1\nblank: 0\ninline: 0\nblock: 3\nremark: 3\n");
}

#[test]
fn list_languages() {
    let out = run(&["--list-languages"]);
    assert!(out.starts_with("NAME        ALIAS   SUFFIX  INLINE  BLOCK\n"));
    assert!(out.contains("python      python  py      #       ''' ''', \"\"\" \"\"\", r''' ''', r\"\"\" \"\"\"\n"));
    assert!(out.contains("sql         sql     sql     --      /* */\n"));
}
