use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dispatch-demo"))
}

fn run(args: &[&str]) -> Output {
    demo().args(args).output().expect("failed to run dispatch-demo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_config(dir: &tempfile::TempDir, yaml: &str) -> PathBuf {
    let path = dir.path().join("dispatch.yml");
    fs::write(&path, yaml).expect("failed to write config");
    path
}

// ---------------------------------------------------------------------------
// Argument vector dispatch
// ---------------------------------------------------------------------------

#[test]
fn run_named_parameter_invokes_command() {
    let out = run(&["run", "greet", "-name", "Alice"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "Hello, Alice!\n");
}

#[test]
fn run_flag_parameter_without_value() {
    let out = run(&["run", "g", "Bob", "-loud"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "HELLO, BOB!\n");
}

#[test]
fn run_positional_integers() {
    let out = run(&["run", "add", "2", "40"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "42\n");
}

#[test]
fn run_choice_and_decimal_parameters() {
    let out = run(&["run", "convert", "-unit", "IN", "-value", "2"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "5.08 cm\n");
}

#[test]
fn run_unknown_parameter_exits_with_input_error() {
    let out = run(&["run", "greet", "-bogus", "X"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(
        stderr(&out).contains("error: command 'greet' has no parameter defined 'bogus'"),
        "stderr: {}",
        stderr(&out)
    );
}

#[test]
fn run_extra_positional_names_position() {
    let out = run(&["run", "greet", "Alice", "Bob"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("has no parameter defined at position 2"));
}

#[test]
fn run_validation_failure_reports_default_message() {
    let out = run(&["run", "add", "two", "3"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("left could not be parsed as type integer."));
}

#[test]
fn run_validation_failure_reports_custom_message() {
    let out = run(&["run", "echo", "hi", "-t", "11"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("times must be a whole number between 1 and 10"));
}

#[test]
fn run_unknown_command() {
    let out = run(&["run", "deploy"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("command 'deploy' not found"));
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

#[test]
fn run_help_lists_registered_commands() {
    let out = run(&["run", "help"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Commands:\n"), "stdout: {text}");
    assert!(text.contains("  greet -name, -loud\n"));
    assert!(text.contains("  add -left, -right\n"));
    assert!(text.contains("followed by '-help'"));
}

#[test]
fn run_command_help_shorthand() {
    let out = run(&["run", "echo", "-help"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Command: echo\n"), "stdout: {text}");
    assert!(text.contains("  Parameter: times\n  Data Type: integer\n  Aliases: t\n"));
}

// ---------------------------------------------------------------------------
// Line and stdin dispatch
// ---------------------------------------------------------------------------

#[test]
fn line_positional_alias_matches_named_form() {
    let named = run(&["line", "greet -name Alice"]);
    let positional = run(&["line", "g Alice"]);
    assert!(named.status.success());
    assert_eq!(stdout(&named), stdout(&positional));
}

#[test]
fn line_blank_input_is_rejected() {
    let out = run(&["line", "   "]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("input is empty"));
}

#[test]
fn repl_dispatches_each_line_and_continues_after_errors() {
    let mut child = demo()
        .arg("repl")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn dispatch-demo");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"greet Alice\n\nnope\nadd 1 2\n")
        .expect("failed to write stdin");

    let out = child.wait_with_output().expect("failed to wait on dispatch-demo");
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(stdout(&out), "Hello, Alice!\n3\n");
    assert!(stderr(&out).contains("command 'nope' not found"));
}

#[test]
fn repl_exits_zero_when_every_line_succeeds() {
    let mut child = demo()
        .arg("repl")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn dispatch-demo");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"add 2 2\nhelp\n")
        .expect("failed to write stdin");

    let out = child.wait_with_output().expect("failed to wait on dispatch-demo");
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("4\nCommands:\n"));
}

// ---------------------------------------------------------------------------
// Catalog and configuration
// ---------------------------------------------------------------------------

#[test]
fn catalog_json_lists_every_command() {
    let out = run(&["catalog", "--format", "json"]);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["greet", "add", "echo", "convert"]);
}

#[test]
fn config_description_appears_in_help() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "description: Demo toolbox\n");

    let out = run(&["--config", config.to_str().unwrap(), "run", "help"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).starts_with("Description: Demo toolbox\n\nCommands:\n"));
}

#[test]
fn config_catalog_format_is_default_for_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "catalog_format: markdown\n");

    let out = run(&["catalog", "--config", config.to_str().unwrap()]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).starts_with("## greet\n"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yml");

    let out = run(&["--config", missing.to_str().unwrap(), "catalog"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("failed to load config"));
}
