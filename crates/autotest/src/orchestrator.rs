// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Linear detect → select → run → log orchestration.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;

use crate::environment::Environment;
use crate::log::{LogEntry, LogError, RunLog, Verdict};
use crate::runner::{ExecutionResult, Runner};
use crate::script::{self, TestScript};

/// Default bound on a single test-script run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Explicit configuration, built at process start and dropped after the run.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Directory the test scripts live in and run from.
    pub project_root: PathBuf,
    /// Directory the run log is written under.
    pub log_dir: PathBuf,
    /// Bound on each subprocess invocation.
    pub timeout: Duration,
}

impl OrchestratorConfig {
    /// Config rooted at `project_root`, logging to `<root>/logs`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let log_dir = project_root.join("logs");
        Self {
            project_root,
            log_dir,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Which invocation stage produced the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The OS test script itself.
    Primary,
    /// The fixed direct-command sequence tried after a failed primary run
    /// on the Windows path.
    Fallback,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Primary => "primary",
            Strategy::Fallback => "fallback",
        }
    }
}

/// Everything the CLI needs to report the run.
#[derive(Debug)]
pub struct RunReport {
    pub environment: Environment,
    pub script: TestScript,
    /// Stage whose result the verdict is based on.
    pub strategy: Strategy,
    pub result: ExecutionResult,
    pub verdict: Verdict,
}

impl RunReport {
    /// Process exit code for this run: 0 on pass, otherwise the underlying
    /// exit code (or 1 when the code carries no meaning).
    pub fn exit_code(&self) -> i32 {
        match self.verdict {
            Verdict::Passed => 0,
            Verdict::Failed { exit_code } if exit_code > 0 => exit_code,
            Verdict::Failed { .. } => 1,
        }
    }
}

/// The test orchestrator. One `run` per instance lifetime is the expected
/// use, matching the CLI's single foreground invocation.
#[derive(Debug)]
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    pub fn new(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    /// Detect the environment, run the matching script, log, and report.
    ///
    /// Subprocess-level failures are folded into the verdict; only a log
    /// write failure surfaces as an error.
    pub async fn run(&self) -> Result<RunReport, LogError> {
        let started_at = Utc::now();

        let environment = Environment::detect();
        tracing::info!(environment = %environment, "detected environment");

        self.run_detected(environment, started_at).await
    }

    /// Same as [`Orchestrator::run`] but with the classification supplied
    /// by the caller.
    pub async fn run_detected(
        &self,
        environment: Environment,
        started_at: chrono::DateTime<Utc>,
    ) -> Result<RunReport, LogError> {
        let script = TestScript::select(environment);
        let runner = Runner::new(&self.config.project_root, self.config.timeout);

        let (program, args) = script.command();
        let primary = runner.run(program, &args).await;

        // On the Windows path a failed batch run gets one more chance via
        // the fixed direct-command sequence. Best effort: the fallback's own
        // failure is terminal.
        let (strategy, result) = if !primary.passed() && script == TestScript::Batch {
            tracing::info!(exit_code = primary.exit_code, "primary failed, trying fallback");
            (Strategy::Fallback, self.run_fallback(&runner).await)
        } else {
            (Strategy::Primary, primary)
        };

        let verdict = Verdict::from_result(&result);

        let command = match strategy {
            Strategy::Primary => format!("{} {} (primary)", program, args.join(" ")),
            Strategy::Fallback => {
                let stages: Vec<String> = script::fallback_commands()
                    .iter()
                    .map(|(p, a)| format!("{} {}", p, a.join(" ")))
                    .collect();
                format!("{} (fallback)", stages.join(" && "))
            }
        };

        let log = RunLog::open(&self.config.log_dir)?;
        log.append(&LogEntry {
            started_at,
            environment,
            command,
            output: result.combined_output(),
            verdict,
        })?;

        Ok(RunReport {
            environment,
            script,
            strategy,
            result,
            verdict,
        })
    }

    /// Run the fixed fallback sequence, stopping at the first failure.
    async fn run_fallback(&self, runner: &Runner) -> ExecutionResult {
        let mut combined = ExecutionResult {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        for (program, args) in script::fallback_commands() {
            let result = runner.run(program, &args).await;
            combined.stdout.push_str(&result.stdout);
            combined.stderr.push_str(&result.stderr);
            combined.exit_code = result.exit_code;
            if !result.passed() {
                break;
            }
        }
        combined
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
