//! End-to-end runs of the `linum` binary.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn linum(args: &[&str]) -> Output {
    match Command::new(env!("CARGO_BIN_EXE_linum"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
    {
        Ok(output) => output,
        Err(err) => panic!("failed to run linum: {err}"),
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim_end().to_string()
}

#[test]
fn add_prints_sum() {
    let output = linum(&["add", "20", "319"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "339");
}

#[test]
fn pow_prints_power() {
    let output = linum(&["pow", "2", "100"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1267650600228229401496703205376");
}

#[test]
fn postfix_prints_conversion() {
    let output = linum(&["postfix", "3*(2+4)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "324+*");
}

#[test]
fn engine_error_exits_with_one() {
    let output = linum(&["--quiet", "postfix", "3*(2+4"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "error[E2001]: unbalanced parentheses: `(` at position 2 is never closed"
    );
}

#[test]
fn malformed_operand_reports_code() {
    let output = linum(&["mul", "12a", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error[E1001]: malformed operand \"12a\""));
}

#[test]
fn usage_error_exits_with_two() {
    let output = linum(&["add", "1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage: linum <command>"));
}

#[test]
fn explain_prints_docs() {
    let output = linum(&["explain", "E1002"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("# E1002: Invalid Exponent"));
}
