// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stocktake-core: Product model, totals aggregation, and report export.

pub mod product;
pub mod report;

pub use product::{summarize, Product, ProductId, Totals};
pub use report::{write_csv, ReportError};
