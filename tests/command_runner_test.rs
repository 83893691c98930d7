//! Tests for RealCommandRunner against a POSIX shell

#![cfg(unix)]

use std::path::Path;

use tempfile::TempDir;

use compose_action::infrastructure::traits::{CommandRunner, RealCommandRunner};

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[test]
fn given_both_streams_when_running_then_captures_each_and_streams_all() {
    let mut chunks = Vec::new();

    let out = RealCommandRunner
        .run_streaming(
            "sh",
            &sh("echo one; echo two >&2; echo three"),
            Path::new("."),
            &mut |c: &str| chunks.push(c.to_string()),
        )
        .unwrap();

    assert!(out.success());
    assert_eq!(out.stdout, "one\nthree\n");
    assert_eq!(out.stderr, "two\n");
    assert_eq!(chunks.len(), 3);
    // stdout order is preserved within its stream
    let stdout_chunks: Vec<_> = chunks.iter().filter(|c| *c != "two\n").collect();
    assert_eq!(stdout_chunks, vec!["one\n", "three\n"]);
}

#[test]
fn given_nonzero_exit_when_running_then_reports_code() {
    let out = RealCommandRunner
        .run_streaming("sh", &sh("echo boom >&2; exit 3"), Path::new("."), &mut |_: &str| {})
        .unwrap();

    assert_eq!(out.exit_code, Some(3));
    assert!(!out.success());
    assert_eq!(out.stderr, "boom\n");
}

#[test]
fn given_cwd_when_running_then_runs_there() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("marker.yml"), "").unwrap();

    let out = RealCommandRunner
        .run_streaming("sh", &sh("ls"), temp.path(), &mut |_: &str| {})
        .unwrap();

    assert!(out.stdout.contains("marker.yml"));
}

#[test]
fn given_missing_executable_when_running_then_io_error() {
    let result = RealCommandRunner.run_streaming(
        "compose-action-no-such-binary",
        &[],
        Path::new("."),
        &mut |_: &str| {},
    );

    assert!(result.is_err());
}
