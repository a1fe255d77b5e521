// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::fmt_amount;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub const CURRENCY: &str = "PHP";

pub fn fmt_money(d: &Decimal) -> String {
    format!("₱{}", fmt_amount(d))
}

/// Table with the given columns right-aligned (money columns).
pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>, right: &[usize]) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().enumerate().map(|(i, v)| {
            if right.contains(&i) {
                Cell::new(v).set_alignment(CellAlignment::Right)
            } else {
                Cell::new(v)
            }
        }));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
