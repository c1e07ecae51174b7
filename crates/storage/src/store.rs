// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory persistence over a single JSON snapshot file.
//!
//! The store keeps all products in memory and rewrites the snapshot on every
//! mutation. Writes go to a temp file in the same directory and are renamed
//! into place, so a crash mid-write never leaves a torn snapshot behind.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stocktake_core::{Product, ProductId};

/// Errors raised by the inventory store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read inventory file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write inventory file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("inventory file {path} is not valid JSON: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },

    #[error("product {0} already exists")]
    DuplicateProduct(ProductId),
}

/// Snapshot layout persisted to disk.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    products: Vec<Product>,
}

/// File-backed inventory store.
///
/// Products keep insertion order; ids are unique.
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    snapshot: Snapshot,
}

impl InventoryStore {
    /// Open the store at `path`, loading the existing snapshot if present.
    ///
    /// A missing file is not an error; the store starts empty and the file
    /// is created on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no inventory file, starting empty");
                Snapshot::default()
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Ok(Self { path, snapshot })
    }

    /// Add a product and persist immediately.
    ///
    /// Rejects ids already present in the store.
    pub fn add(&mut self, product: Product) -> Result<(), StoreError> {
        if self.snapshot.products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateProduct(product.id));
        }
        tracing::debug!(id = %product.id, name = %product.name, "adding product");
        self.snapshot.products.push(product);
        self.persist()
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.snapshot.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.snapshot.products.iter().find(|p| p.id == id)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the snapshot to a temp file and rename it into place.
    fn persist(&self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        let json = serde_json::to_string_pretty(&self.snapshot).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
