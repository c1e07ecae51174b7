// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared spec harness: a temp project directory and a fluent wrapper
//! around the built `stocktake` binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::Output;

/// A throwaway project directory the binary runs inside.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Fresh empty project directory.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("mkdir: {e}"));
        }
        std::fs::write(&path, content).unwrap_or_else(|e| panic!("write {rel}: {e}"));
    }

    /// Read a file relative to the project root.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel))
            .unwrap_or_else(|e| panic!("read {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    /// Command builder for the `stocktake` binary, rooted here.
    pub fn stocktake(&self) -> Spec {
        let mut cmd = assert_cmd::Command::cargo_bin("stocktake")
            .unwrap_or_else(|e| panic!("stocktake binary not built: {e}"));
        cmd.current_dir(self.dir.path());
        Spec { cmd }
    }
}

/// One pending invocation of the binary.
pub struct Spec {
    cmd: assert_cmd::Command,
}

impl Spec {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Run and assert a zero exit code.
    pub fn passes(mut self) -> SpecOutput {
        let output = self.cmd.output().unwrap_or_else(|e| panic!("spawn: {e}"));
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        SpecOutput { output }
    }

    /// Run and assert a non-zero exit code.
    pub fn fails(mut self) -> SpecOutput {
        let output = self.cmd.output().unwrap_or_else(|e| panic!("spawn: {e}"));
        assert!(
            !output.status.success(),
            "expected failure, got success\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout),
        );
        SpecOutput { output }
    }

    /// Run and assert an exact exit code.
    pub fn exits_with(mut self, code: i32) -> SpecOutput {
        let output = self.cmd.output().unwrap_or_else(|e| panic!("spawn: {e}"));
        assert_eq!(
            output.status.code(),
            Some(code),
            "stdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        SpecOutput { output }
    }
}

/// Captured output with fluent assertions.
pub struct SpecOutput {
    output: Output,
}

impl SpecOutput {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing `{needle}`:\n{}",
            self.stdout(),
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing `{needle}`:\n{}",
            self.stderr(),
        );
        self
    }
}
