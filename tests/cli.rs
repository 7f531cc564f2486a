//! End-to-end checks of the `nqueens` binary.

use std::process::{Command, Output};

fn nqueens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nqueens"))
        .args(args)
        .output()
        .expect("failed to launch nqueens")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_hill_climb_prints_single_line() {
    let output = nqueens(&["--size", "4", "--alg", "0"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "2,4,1,3\n");
}

#[test]
fn test_annealing_prints_single_line() {
    let output = nqueens(&["--size", "4", "--alg", "1"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "2,4,1,3\n");
}

#[test]
fn test_unsolved_annealing_prints_best_and_warns() {
    let output = nqueens(&["--size", "8", "--alg", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4,2,8,6,3,1,2,7\n");
    assert!(stderr(&output).contains("warning"));
}

#[test]
fn test_unknown_algorithm_fails() {
    let output = nqueens(&["--size", "4", "--alg", "3"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unknown algorithm 3"));
}

#[test]
fn test_zero_size_fails() {
    let output = nqueens(&["--size", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("board size must be at least 1"));
}

#[test]
fn test_capped_hill_climb_fails() {
    let output = nqueens(&["--size", "3", "--max-iterations", "5"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("search exhausted after 5 iterations"));
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    let output = nqueens(&["--size", "4", "--verbose", "--log-every", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2,4,1,3\n");
    assert!(stderr(&output).contains("Search finished after 26 iterations"));
}
