// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stocktake-autotest: environment-aware test orchestration.
//!
//! Detects the host environment, invokes the matching OS test script,
//! captures its output, appends a timestamped entry to the run log, and
//! reports a pass/fail verdict. Every subprocess-level failure (missing
//! script, timeout, launch error) is folded into a failed execution result;
//! only a log-write failure is fatal.

pub mod environment;
pub mod log;
pub mod orchestrator;
pub mod runner;
pub mod script;

pub use environment::Environment;
pub use log::{LogEntry, LogError, RunLog, Verdict};
pub use orchestrator::{Orchestrator, OrchestratorConfig, RunReport, Strategy};
pub use runner::{ExecutionResult, Runner, EXIT_LAUNCH_FAILED, EXIT_TIMED_OUT};
pub use script::TestScript;
