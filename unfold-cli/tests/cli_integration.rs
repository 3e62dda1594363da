//! Integration tests for the unfold CLI
//!
//! The binary takes no arguments; every test pipes input on stdin and
//! checks the exact bytes on stdout.

use assert_cmd::Command;
use predicates::prelude::*;

fn unfold() -> Command {
    Command::cargo_bin("unfold").unwrap()
}

#[test]
fn test_joins_wrapped_prose() {
    unfold()
        .write_stdin("hello\nworld\n")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_does_not_double_existing_trailing_space() {
    unfold()
        .write_stdin("hello \nworld\n")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_preserves_paragraph_breaks() {
    unfold()
        .write_stdin("para one\n\npara two\n")
        .assert()
        .success()
        .stdout("para one\n\npara two\n");
}

#[test]
fn test_keeps_structural_lines_on_their_own() {
    unfold()
        .write_stdin("text\n* bullet\nmore text\n")
        .assert()
        .success()
        .stdout("text\n* bullet\nmore text\n");
}

#[test]
fn test_rejoins_a_wrapped_document() {
    let input = "\
# Notes

This paragraph was
wrapped at a narrow
width by the author.

| name | value |
| ---- | ----- |

A second paragraph,
also wrapped.
";
    let expected = "\
# Notes

This paragraph was wrapped at a narrow width by the author.

| name | value |
| ---- | ----- |

A second paragraph, also wrapped.
";
    unfold()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_last_line_without_newline_is_kept_and_terminated() {
    unfold()
        .write_stdin("first\nlast")
        .assert()
        .success()
        .stdout("first last\n");
}

#[test]
fn test_empty_input_produces_empty_output() {
    unfold()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_diagnostics_stay_off_stdout() {
    unfold()
        .env("RUST_LOG", "debug")
        .write_stdin("hello\nworld\n")
        .assert()
        .success()
        .stdout("hello world\n")
        .stderr(predicate::str::contains("read 2 lines"));
}

#[test]
fn test_invalid_utf8_fails_with_context() {
    unfold()
        .write_stdin(&b"fine\n\xff\xfe\n"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to rejoin standard input"));
}
