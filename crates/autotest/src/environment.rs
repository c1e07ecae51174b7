// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host environment classification.

use std::fmt;
use std::path::Path;

/// Coarse classification of the host, derived once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Windows,
    UnixLike,
    Containerized,
}

impl Environment {
    /// Detect the current host environment.
    ///
    /// Unrecognized platforms degrade to [`Environment::UnixLike`] rather
    /// than failing the run.
    pub fn detect() -> Self {
        Self::classify(std::env::consts::OS, container_marker_present(Path::new("/")))
    }

    /// Classification from pre-gathered facts. Pure; no probes.
    pub fn classify(os: &str, containerized: bool) -> Self {
        if os == "windows" {
            return Environment::Windows;
        }
        if containerized {
            return Environment::Containerized;
        }
        Environment::UnixLike
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Windows => "windows",
            Environment::UnixLike => "unix-like",
            Environment::Containerized => "containerized",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probe for container markers under `root`.
///
/// Checks for a `/.dockerenv` marker file, then for container runtime names
/// in `/proc/1/cgroup`. Missing or unreadable probe files mean
/// "not containerized"; the probe never fails.
pub fn container_marker_present(root: &Path) -> bool {
    if root.join(".dockerenv").exists() {
        return true;
    }
    let cgroup = root.join("proc/1/cgroup");
    match std::fs::read_to_string(cgroup) {
        Ok(content) => ["docker", "containerd", "kubepods", "lxc"]
            .iter()
            .any(|marker| content.contains(marker)),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
