// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only, human-readable run log.
//!
//! One entry per run: a timestamp header, the command invoked, the captured
//! output block, and a verdict line. Entries are only ever appended; prior
//! content stays byte-for-byte intact.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::environment::Environment;
use crate::runner::ExecutionResult;

/// Default log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "test_run.log";

/// Errors raised by the run log. Log failures are the one fatal error class
/// in the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to append to log file {path}: {source}")]
    Append {
        path: String,
        source: std::io::Error,
    },
}

/// Pass/fail verdict derived from an execution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed { exit_code: i32 },
}

impl Verdict {
    pub fn from_result(result: &ExecutionResult) -> Self {
        if result.passed() {
            Verdict::Passed
        } else {
            Verdict::Failed {
                exit_code: result.exit_code,
            }
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "TEST PASSED"),
            Verdict::Failed { exit_code } => write!(f, "TEST FAILED (exit_code={exit_code})"),
        }
    }
}

/// One run's worth of log content.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub started_at: DateTime<Utc>,
    pub environment: Environment,
    /// Command line that was invoked, with the strategy that produced it.
    pub command: String,
    pub output: String,
    pub verdict: Verdict,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stamp = self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        writeln!(f, "=== TEST RUN START: {} (env={}) ===", stamp, self.environment)?;
        writeln!(f, "command: {}", self.command)?;
        if self.output.is_empty() {
            writeln!(f, "(no output)")?;
        } else {
            writeln!(f, "{}", self.output.trim_end_matches('\n'))?;
        }
        writeln!(f, "{}", self.verdict)?;
        writeln!(f, "=== END ===")?;
        writeln!(f)
    }
}

/// Handle on the log directory and file.
#[derive(Debug, Clone)]
pub struct RunLog {
    file: PathBuf,
}

impl RunLog {
    /// Open the log under `dir`, creating the directory if absent.
    ///
    /// Creation is idempotent; an existing directory is not an error.
    pub fn open(dir: &Path) -> Result<Self, LogError> {
        std::fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self {
            file: dir.join(LOG_FILE_NAME),
        })
    }

    /// Append one entry. Never truncates or rewrites prior entries.
    pub fn append(&self, entry: &LogEntry) -> Result<(), LogError> {
        let append_err = |source| LogError::Append {
            path: self.file.display().to_string(),
            source,
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file)
            .map_err(append_err)?;
        file.write_all(entry.to_string().as_bytes())
            .map_err(append_err)?;
        tracing::debug!(path = %self.file.display(), verdict = %entry.verdict, "logged run");
        Ok(())
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.file
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
