// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Product model and totals aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub qty: u32,
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, qty: u32, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            qty,
            price,
        }
    }

    /// Total value of this line (quantity times unit price).
    pub fn line_value(&self) -> f64 {
        f64::from(self.qty) * self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product({}, {}, {}, {:.2})",
            self.id, self.name, self.qty, self.price
        )
    }
}

/// Aggregate quantity and value across a set of products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub quantity: u64,
    pub value: f64,
}

/// Sum quantities and line values over all products.
///
/// An empty slice yields zeroed totals.
pub fn summarize(products: &[Product]) -> Totals {
    let mut totals = Totals::default();
    for p in products {
        totals.quantity += u64::from(p.qty);
        totals.value += p.line_value();
    }
    totals
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod tests;
