// Command-line driver tests
//
// These run the built binary and check what a user sees: the printed value,
// the exit status per failure kind, and how the prompt handles its input.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn loxexpr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loxexpr"))
        .args(args)
        .output()
        .expect("failed to start loxexpr")
}

fn repl(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_loxexpr"))
        .arg("-i")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start loxexpr");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write to the prompt");

    child.wait_with_output().expect("failed to wait for loxexpr")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn eval_prints_value_and_exits_zero() {
    let output = loxexpr(&["-e", "(1 + 2) * (4 - 3)"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn eval_exit_codes_follow_error_kind() {
    assert_eq!(loxexpr(&["-e", "\"abc"]).status.code(), Some(65));
    assert_eq!(loxexpr(&["-e", "1 +"]).status.code(), Some(65));
    assert_eq!(loxexpr(&["--eval", "-nil"]).status.code(), Some(70));
}

#[test]
fn emit_selects_what_is_printed() {
    let output = loxexpr(&["--emit", "rpn", "-e", "(1 + 2) * (4 - 3)"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1 2 + 4 3 - *\n");

    let output = loxexpr(&["--emit", "ast", "-e", "-123 * (45.67)"]);
    assert_eq!(stdout(&output), "(* (- 123) (group 45.67))\n");
}

#[test]
fn file_is_evaluated() {
    let dir = std::env::temp_dir();
    let ok_path = dir.join(format!("loxexpr-ok-{}.lox", std::process::id()));
    let bad_path = dir.join(format!("loxexpr-bad-{}.lox", std::process::id()));
    fs::write(&ok_path, "// sum\n\"foo\" +\n\"bar\"\n").unwrap();
    fs::write(&bad_path, "/* mixed */ \"foo\" + 1\n").unwrap();

    let ok = loxexpr(&[ok_path.to_str().unwrap()]);
    let bad = loxexpr(&[bad_path.to_str().unwrap()]);
    let _ = fs::remove_file(&ok_path);
    let _ = fs::remove_file(&bad_path);

    assert_eq!(ok.status.code(), Some(0));
    assert_eq!(stdout(&ok), "foobar\n");
    assert_eq!(bad.status.code(), Some(70));
}

#[test]
fn missing_file_exits_one() {
    let output = loxexpr(&["definitely/not/here.lox"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading file"));
}

#[test]
fn interactive_flag_conflicts_with_file_and_eval() {
    assert_eq!(loxexpr(&["some.lox", "-i"]).status.code(), Some(2));
    assert_eq!(loxexpr(&["-i", "-e", "1"]).status.code(), Some(2));
}

#[test]
fn prompt_continues_after_error_and_stops_on_exit() {
    let output = repl("1 +\n2 * 3\nexit\n4 + 5\n");
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("> 6\n"), "{}", out);
    assert!(!out.contains("9\n"), "{}", out);
    assert!(!output.stderr.is_empty());
}

#[test]
fn prompt_stops_on_quit_and_end_of_input() {
    let quit = repl("quit\n1 + 1\n");
    assert_eq!(quit.status.code(), Some(0));
    assert!(!stdout(&quit).contains("2\n"));

    let eof = repl("\n\"a\" + \"b\"\n");
    assert_eq!(eof.status.code(), Some(0));
    assert!(stdout(&eof).contains("> ab\n"));
}
