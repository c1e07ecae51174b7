// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test script selection.

use crate::environment::Environment;

/// Name of the Unix test script, relative to the project root.
pub const SHELL_SCRIPT: &str = "run_test.sh";
/// Name of the Windows test script, relative to the project root.
pub const BATCH_SCRIPT: &str = "run_test.bat";

/// The two known test entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestScript {
    /// `run_test.sh`, invoked through `sh`.
    Shell,
    /// `run_test.bat`, invoked through `cmd /C`.
    Batch,
}

impl TestScript {
    /// Select the script for an environment. Total over all classifications.
    pub fn select(env: Environment) -> Self {
        match env {
            Environment::Windows => TestScript::Batch,
            Environment::UnixLike | Environment::Containerized => TestScript::Shell,
        }
    }

    /// Script file name relative to the project root.
    pub fn file_name(&self) -> &'static str {
        match self {
            TestScript::Shell => SHELL_SCRIPT,
            TestScript::Batch => BATCH_SCRIPT,
        }
    }

    /// Interpreter and arguments used to run the script.
    pub fn command(&self) -> (&'static str, Vec<&'static str>) {
        match self {
            TestScript::Shell => ("sh", vec![SHELL_SCRIPT]),
            TestScript::Batch => ("cmd", vec!["/C", BATCH_SCRIPT]),
        }
    }
}

/// Fixed fallback command sequence for the Windows path: a lint pass, then
/// the test-framework invocation. Run in order, stopping at the first
/// failure.
pub fn fallback_commands() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("cargo", vec!["check", "--workspace"]),
        ("cargo", vec!["test", "--workspace"]),
    ]
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
