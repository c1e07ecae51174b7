// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stocktake test` specs
//!
//! Verify the detect → run → log → report sequence end to end.

use crate::prelude::*;

const LOG_PATH: &str = "logs/test_run.log";

fn project_with_script(code: i32) -> Project {
    let temp = Project::empty();
    temp.file(
        "run_test.sh",
        &format!("#!/bin/sh\necho linting\necho testing\nexit {code}\n"),
    );
    temp
}

#[cfg(unix)]
#[test]
fn passing_script_exits_zero_and_logs_passed() {
    let temp = project_with_script(0);

    temp.stocktake()
        .args(&["test"])
        .passes()
        .stdout_has("Detected environment:")
        .stdout_has("TEST PASSED");

    let log = temp.read(LOG_PATH);
    assert!(log.contains("=== TEST RUN START"));
    assert!(log.contains("linting"));
    assert!(log.contains("TEST PASSED"));
}

#[cfg(unix)]
#[test]
fn failing_script_propagates_exit_code() {
    let temp = project_with_script(2);

    temp.stocktake()
        .args(&["test"])
        .exits_with(2)
        .stdout_has("TEST FAILED (exit_code=2)");

    assert!(temp.read(LOG_PATH).contains("TEST FAILED (exit_code=2)"));
}

#[cfg(unix)]
#[test]
fn missing_script_fails_without_crashing() {
    let temp = Project::empty();

    temp.stocktake()
        .args(&["test"])
        .fails()
        .stdout_has("TEST FAILED");

    assert!(temp.read(LOG_PATH).contains("TEST FAILED"));
}

#[cfg(unix)]
#[test]
fn repeated_runs_append_to_the_same_log() {
    let temp = project_with_script(0);

    temp.stocktake().args(&["test"]).passes();
    let first = temp.read(LOG_PATH);

    temp.stocktake().args(&["test"]).passes();
    let second = temp.read(LOG_PATH);

    assert!(second.starts_with(&first), "prior log content must stay a prefix");
    assert_eq!(second.matches("=== TEST RUN START").count(), 2);
}

#[cfg(unix)]
#[test]
fn log_directory_creation_is_idempotent() {
    let temp = project_with_script(0);
    temp.stocktake().args(&["test"]).passes();
    assert!(temp.exists("logs"));
    // Second run must not trip over the existing directory.
    temp.stocktake().args(&["test"]).passes();
}
