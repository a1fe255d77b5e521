// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger::{fmt_amount, fmt_date};
use crate::models::{
    Filter, SortDirection, SortKey, TransactionInput, TransactionType, TransactionWithBalance,
};
use crate::state::AppState;
use crate::utils::{CURRENCY, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("edit", sub)) => edit(state, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if state.delete_transaction(id) {
                println!("Deleted transaction {}", id);
            } else {
                println!("Nothing to delete for {}", id);
            }
        }
        Some(("rm-many", sub)) => {
            let ids: Vec<String> = sub
                .get_many::<String>("ids")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            let removed = state.delete_many(&ids);
            println!("Deleted {} transaction(s)", removed);
        }
        Some(("list", sub)) => list(state, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn input_from(sub: &clap::ArgMatches) -> Result<TransactionInput> {
    let r#type: TransactionType = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let amount = sub.get_one::<String>("amount").unwrap();
    let details = sub.get_one::<String>("details").map(String::as_str).unwrap_or("");
    Ok(TransactionInput::new(r#type, amount.as_str(), details))
}

/// Validation rejections are reported to the user, not treated as failures.
fn report(err: LedgerError) -> Result<()> {
    match err {
        LedgerError::InvalidAmount(_) => {
            println!("{}", err);
            Ok(())
        }
        LedgerError::FirstEntryMustBeIncome => {
            println!("First Transaction Rule: {}", err);
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let input = input_from(sub)?;
    match state.add_transaction(&input) {
        Ok(t) => {
            println!(
                "Recorded {} {} '{}' ({})",
                t.r#type,
                fmt_amount(&t.amount),
                t.details,
                t.id
            );
            Ok(())
        }
        Err(e) => report(e),
    }
}

fn edit(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let input = input_from(sub)?;
    match state.update_transaction(id, &input) {
        Ok(t) => {
            println!(
                "Updated {}: {} {} '{}'",
                t.id,
                t.r#type,
                fmt_amount(&t.amount),
                t.details
            );
            Ok(())
        }
        Err(e) => report(e),
    }
}

pub fn query_rows(state: &AppState, sub: &clap::ArgMatches) -> Result<Vec<TransactionWithBalance>> {
    let key: SortKey = sub
        .get_one::<String>("sort")
        .map(String::as_str)
        .unwrap_or("date")
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    // Newest first unless --asc, like the history table.
    let direction = if sub.get_flag("asc") {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()
        .map_err(|e| anyhow!(e))?;
    let criteria = Filter {
        r#type,
        search: sub.get_one::<String>("search").cloned(),
    };
    Ok(state.ledger_view(key, direction, &criteria))
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(state, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions yet.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                let t = &r.transaction;
                let amount = fmt_amount(&t.amount);
                let (salary, expense) = match t.r#type {
                    TransactionType::Salary => (amount, String::new()),
                    TransactionType::Expense => (String::new(), amount),
                };
                vec![
                    t.id.clone(),
                    fmt_date(&t.date),
                    t.details.clone(),
                    t.r#type.to_string(),
                    salary,
                    expense,
                    fmt_amount(&r.balance),
                ]
            })
            .collect();
        let salary_hdr = format!("Salary ({})", CURRENCY);
        let expense_hdr = format!("Expenses ({})", CURRENCY);
        let balance_hdr = format!("Balance ({})", CURRENCY);
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Details", "Type", &salary_hdr, &expense_hdr, &balance_hdr],
                rows,
                &[4, 5, 6],
            )
        );
    }
    Ok(())
}
