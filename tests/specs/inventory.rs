// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory command specs
//!
//! Verify `add`, `list`, `totals`, and `report` against a temp inventory.

use crate::prelude::*;

fn seeded() -> Project {
    let temp = Project::empty();
    for (id, name, qty, price) in [
        ("1", "Apple", "100", "0.5"),
        ("2", "Banana", "200", "0.3"),
        ("3", "Orange", "150", "0.4"),
    ] {
        temp.stocktake()
            .args(&["add", "--id", id, "--name", name, "--qty", qty, "--price", price])
            .passes();
    }
    temp
}

#[test]
fn add_then_list_shows_products() {
    let temp = seeded();
    temp.stocktake()
        .args(&["list"])
        .passes()
        .stdout_has("Apple")
        .stdout_has("Banana")
        .stdout_has("Orange");
}

#[test]
fn duplicate_id_is_rejected() {
    let temp = seeded();
    temp.stocktake()
        .args(&["add", "--id", "1", "--name", "Apple", "--qty", "1", "--price", "1.0"])
        .fails()
        .stderr_has("already exists");
}

#[test]
fn totals_sum_quantity_and_value() {
    let temp = seeded();
    temp.stocktake()
        .args(&["totals"])
        .passes()
        .stdout_has("Total quantity: 450")
        .stdout_has("Total value: 170.00");
}

#[test]
fn totals_json_is_machine_readable() {
    let temp = seeded();
    let out = temp.stocktake().args(&["totals", "--json"]).passes().stdout();
    let parsed: serde_json::Value =
        serde_json::from_str(&out).unwrap_or_else(|e| panic!("bad json: {e}\n{out}"));
    assert_eq!(parsed["quantity"], 450);
}

#[test]
fn list_json_is_an_array() {
    let temp = seeded();
    let out = temp.stocktake().args(&["list", "--json"]).passes().stdout();
    let parsed: serde_json::Value =
        serde_json::from_str(&out).unwrap_or_else(|e| panic!("bad json: {e}\n{out}"));
    assert_eq!(parsed.as_array().map(Vec::len), Some(3));
}

#[test]
fn report_exports_csv() {
    let temp = seeded();
    temp.stocktake()
        .args(&["report", "report.csv"])
        .passes()
        .stdout_has("wrote 3 products");

    let csv = temp.read("report.csv");
    assert!(csv.starts_with("id,name,qty,price\n"));
    assert!(csv.contains("1,Apple,100,0.5"));
}

#[test]
fn list_on_empty_inventory_says_so() {
    let temp = Project::empty();
    temp.stocktake().args(&["list"]).passes().stdout_has("(empty inventory)");
}

#[test]
fn inventory_persists_across_invocations() {
    let temp = Project::empty();
    temp.stocktake()
        .args(&["add", "--id", "7", "--name", "Hammer", "--qty", "3", "--price", "12.5"])
        .passes();
    assert!(temp.exists("inventory.json"));
    temp.stocktake().args(&["list"]).passes().stdout_has("Hammer");
}
