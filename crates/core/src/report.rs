// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CSV report export.
//!
//! Emits one header row plus one row per product. Fields containing commas,
//! quotes, or newlines are quoted RFC-4180 style.

use crate::product::Product;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Errors raised while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Write a CSV report covering all products to `path`.
///
/// The parent directory must already exist; the file is created or truncated.
pub fn write_csv(products: &[Product], path: &Path) -> Result<(), ReportError> {
    let mut out = String::from("id,name,qty,price\n");
    for p in products {
        // id/qty/price never need quoting; the free-form name might.
        let _ = writeln!(out, "{},{},{},{}", p.id, escape_field(&p.name), p.qty, p.price);
    }
    fs::write(path, out).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Quote a field if it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
