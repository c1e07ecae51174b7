// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stocktake add|list|totals|report` - inventory commands.

use std::path::Path;

use anyhow::{Context, Result};

use crate::output::OutputFormat;
use stocktake_core::{summarize, Product};
use stocktake_storage::InventoryStore;

pub fn add(db: &Path, id: u32, name: String, qty: u32, price: f64) -> Result<u8> {
    let mut store = InventoryStore::open(db)?;
    let product = Product::new(id, name, qty, price);
    store.add(product.clone())?;
    println!("added {product}");
    Ok(0)
}

pub fn list(db: &Path, format: OutputFormat) -> Result<u8> {
    let store = InventoryStore::open(db)?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(store.products())?);
        }
        OutputFormat::Text => {
            if store.products().is_empty() {
                println!("(empty inventory)");
            }
            for p in store.products() {
                println!("{:>6}  {:<24} qty {:>6}  @ {:.2}", p.id, p.name, p.qty, p.price);
            }
        }
    }
    Ok(0)
}

pub fn totals(db: &Path, format: OutputFormat) -> Result<u8> {
    let store = InventoryStore::open(db)?;
    let totals = summarize(store.products());
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
        OutputFormat::Text => {
            println!("Total quantity: {}", totals.quantity);
            println!("Total value: {:.2}", totals.value);
        }
    }
    Ok(0)
}

pub fn report(db: &Path, path: &Path) -> Result<u8> {
    let store = InventoryStore::open(db)?;
    stocktake_core::write_csv(store.products(), path)
        .with_context(|| format!("cannot export report to {}", path.display()))?;
    println!("wrote {} products to {}", store.products().len(), path.display());
    Ok(0)
}
