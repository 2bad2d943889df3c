//! End-to-end tests for the `hanoi` binary
//!
//! Each test runs the real executable with piped stdin and checks what it
//! printed.

use similar_asserts::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run `hanoi` with `args`, feeding `stdin`, and return its output
fn run_hanoi(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hanoi"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn hanoi: {}", e));

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait for hanoi");
    if !output.status.success() {
        eprintln!("--- STDOUT ---");
        eprintln!("{}", String::from_utf8_lossy(&output.stdout));
        eprintln!("--- STDERR ---");
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        panic!("hanoi {:?} failed with {:?}", args, output.status.code());
    }
    output
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_solve_prompts_and_prints_moves() {
    let output = run_hanoi(&["solve"], "2\n\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("Enter the number of discs: "));
    let expected = "Enter the number of discs: \
                    Move disc 1 from A to B\n\
                    Move disc 2 from A to C\n\
                    Move disc 1 from B to C\n\
                    \nPress Enter to exit...";
    assert_eq!(stdout.as_ref(), expected);
}

#[test]
fn test_solve_reprompts_on_bad_input() {
    let output = run_hanoi(&["solve", "--no-wait"], "lots\n1\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("not a whole number"));
    assert_eq!(stdout.matches("Enter the number of discs: ").count(), 2);
    assert!(stdout.ends_with("Move disc 1 from A to C\n"));
}

#[test]
fn test_solve_with_flag_counts_moves() {
    let output = run_hanoi(&["solve", "--discs", "5", "--no-wait"], "");
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[15], "Move disc 5 from A to C");
}

#[test]
fn test_solve_json_lines() {
    let output = run_hanoi(&["solve", "--discs", "1", "--format", "json", "--no-wait"], "");
    let lines = stdout_lines(&output);
    assert_eq!(lines, vec![r#"{"disc":1,"from":"A","to":"C"}"#.to_string()]);
}

#[test]
fn test_solve_negative_count_prints_nothing_and_waits() {
    let output = run_hanoi(&["solve"], "-1\n\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(
        stdout.as_ref(),
        "Enter the number of discs: \nPress Enter to exit..."
    );
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");
}

#[test]
fn test_solve_negative_flag_prints_nothing() {
    let output = run_hanoi(&["solve", "--discs", "-3", "--no-wait"], "");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_solve_eof_exits_cleanly() {
    let output = run_hanoi(&["solve"], "");
    assert!(output.status.success());
}

#[test]
fn test_play_step_mode_runs_to_completion() {
    let output = run_hanoi(&["play", "--discs", "3"], &"\n".repeat(7));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Tower of Hanoi: 3 discs, step mode"));
    assert!(stdout.contains("Move 1 from Rod 1 to Rod 3"));
    assert!(stdout.contains("Move 3 from Rod 1 to Rod 3"));
    assert!(stdout.contains("Puzzle solved in 7 moves"));
}

#[test]
fn test_play_step_mode_quit() {
    let output = run_hanoi(&["play", "--discs", "4"], "\nq\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Move 1 from Rod 1 to Rod 2"));
    assert!(!stdout.contains("Puzzle solved"));
}

#[test]
fn test_play_prompts_for_out_of_range_discs() {
    let output = run_hanoi(&["play", "--discs", "11", "-v", "minimal"], "2\n3\nq\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("Invalid disc count: 11"));
    assert!(stderr.contains("Invalid disc count: 2"));
    assert!(stdout.contains("Tower of Hanoi: 3 discs, step mode"));
}

#[test]
fn test_play_auto_mode() {
    let output = run_hanoi(
        &["play", "--discs", "3", "--mode", "auto", "--interval-ms", "100"],
        "",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Move ").count(), 7);
    assert!(stdout.contains("Puzzle solved in 7 moves"));
}

#[test]
fn test_play_auto_mode_max_ticks() {
    let output = run_hanoi(
        &[
            "play", "--discs", "3", "--mode", "auto", "--interval-ms", "100", "--max-ticks", "2",
        ],
        "",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Stopped after 2 of 7 moves"));
    assert!(!stdout.contains("Puzzle solved"));
}

#[test]
fn test_play_auto_mode_speed_change() {
    let output = run_hanoi(
        &["play", "--discs", "3", "--mode", "auto", "--interval-ms", "200"],
        "+\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Interval set to 100 ms"));
    assert!(stdout.contains("Puzzle solved in 7 moves"));
}

#[test]
fn test_play_auto_mode_stop_command() {
    let output = run_hanoi(
        &["play", "--discs", "3", "--mode", "auto", "--interval-ms", "2000"],
        "q\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Stopped after 0 of 7 moves"));
    assert!(!stdout.contains("Puzzle solved"));
}

#[test]
fn test_play_manual_mode() {
    let moves = "1 a c\n2 a b\n1 c b\n3 a c\n1 b a\n2 b c\n1 a c\n";
    let input = format!("3 a b\n{moves}");
    let output = run_hanoi(&["play", "--discs", "3", "--mode", "manual"], &input);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Move rejected: disc 3 is not on top of peg A"));
    assert!(stdout.contains("Moved disc 1 from Rod 1 to Rod 3"));
    assert!(stdout.contains("All discs are on Rod 3"));
}

#[test]
fn test_play_json_format() {
    let output = run_hanoi(
        &["play", "--discs", "3", "--format", "json", "-v", "1"],
        "q\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("Tower of Hanoi"))
        .expect("banner line");
    let value: serde_json::Value = serde_json::from_str(line).expect("banner is JSON");
    assert_eq!(value["level"], "Minimal");
}
