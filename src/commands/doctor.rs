// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{chronological_cmp, fmt_amount, fmt_date, with_running_balance};
use crate::models::{Transaction, TransactionType};
use crate::state::AppState;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// (issue, detail) pairs for everything that looks wrong in `set`.
pub fn diagnose(set: &[Transaction]) -> Vec<(String, String)> {
    let mut issues = Vec::new();

    // 1) Duplicate ids
    let mut seen = HashSet::new();
    for t in set {
        if !seen.insert(t.id.as_str()) {
            issues.push(("duplicate_id".to_string(), t.id.clone()));
        }
    }

    // 2) Non-positive amounts
    for t in set.iter().filter(|t| t.amount <= Decimal::ZERO) {
        issues.push(("non_positive_amount".to_string(), format!("{} {}", t.id, t.amount)));
    }

    // 3) Ledger opening with an expense
    if let Some(first) = set.iter().min_by(|a, b| chronological_cmp(a, b)) {
        if first.r#type == TransactionType::Expense {
            issues.push(("first_entry_expense".to_string(), first.id.clone()));
        }
    }

    // 4) Running balance below zero
    let mut rows = with_running_balance(set);
    rows.sort_by(|a, b| chronological_cmp(&a.transaction, &b.transaction));
    for r in rows.iter().filter(|r| r.balance < Decimal::ZERO) {
        issues.push((
            "negative_balance".to_string(),
            format!("{} {}", fmt_date(&r.transaction.date), fmt_amount(&r.balance)),
        ));
    }

    issues
}

pub fn handle(state: &AppState) -> Result<()> {
    let rows: Vec<Vec<String>> = diagnose(state.transactions())
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows, &[]));
    }
    Ok(())
}
