// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded subprocess execution with full output capture.
//!
//! The runner never returns an error: timeouts and launch failures are
//! folded into synthetic [`ExecutionResult`]s so the orchestrator can log
//! and report them like any other failed run.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tokio::time::timeout;

/// Sentinel exit code for a run killed by the timeout.
pub const EXIT_TIMED_OUT: i32 = 124;
/// Sentinel exit code for a command that could not be launched.
pub const EXIT_LAUNCH_FAILED: i32 = 127;

/// Outcome of a single subprocess invocation.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit code of the process, or a sentinel for timeout/launch failure.
    pub exit_code: i32,
    /// Captured stdout, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured stderr, lossily decoded as UTF-8.
    pub stderr: String,
}

impl ExecutionResult {
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }

    /// Synthetic result for a run that exceeded its timeout.
    fn timed_out(command: &str, limit: Duration) -> Self {
        Self {
            exit_code: EXIT_TIMED_OUT,
            stdout: String::new(),
            stderr: format!("`{}` timed out after {}s", command, limit.as_secs()),
        }
    }

    /// Synthetic result for a command that failed to launch.
    fn launch_failed(command: &str, source: &std::io::Error) -> Self {
        Self {
            exit_code: EXIT_LAUNCH_FAILED,
            stdout: String::new(),
            stderr: format!("failed to launch `{command}`: {source}"),
        }
    }

    /// Stdout and stderr concatenated for the log's output block.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Runs commands in a fixed working directory under a bounded timeout.
#[derive(Debug, Clone)]
pub struct Runner {
    cwd: PathBuf,
    timeout: Duration,
}

impl Runner {
    pub fn new(cwd: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            cwd: cwd.into(),
            timeout,
        }
    }

    /// Run `program` with `args`, capturing stdout/stderr as text.
    ///
    /// Always produces a result: a timeout kills the child (via
    /// `kill_on_drop`) and yields the [`EXIT_TIMED_OUT`] sentinel; a spawn
    /// error yields [`EXIT_LAUNCH_FAILED`].
    pub async fn run(&self, program: &str, args: &[&str]) -> ExecutionResult {
        let start = Instant::now();
        let cmd_span = tracing::info_span!(
            "autotest.run",
            cmd = %program,
            args = ?args,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let mut process = tokio::process::Command::new(program);
        process.args(args);
        process.current_dir(&self.cwd);
        process.stdout(std::process::Stdio::piped());
        process.stderr(std::process::Stdio::piped());
        process.kill_on_drop(true);

        let child = match process.spawn() {
            Ok(child) => child,
            Err(source) => {
                tracing::warn!(cmd = %program, error = %source, "launch failed");
                return ExecutionResult::launch_failed(program, &source);
            }
        };

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                tracing::warn!(cmd = %program, error = %source, "wait failed");
                return ExecutionResult::launch_failed(program, &source);
            }
            // Dropping the incomplete future kills the child.
            Err(_elapsed) => {
                tracing::warn!(cmd = %program, timeout_s = self.timeout.as_secs(), "timed out");
                return ExecutionResult::timed_out(program, self.timeout);
            }
        };

        let exit_code = output.status.code().unwrap_or(-1);
        cmd_span.record("exit_code", exit_code);
        cmd_span.record("duration_ms", start.elapsed().as_millis() as u64);

        ExecutionResult {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
