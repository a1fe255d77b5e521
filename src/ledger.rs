// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction ledger engine.
//!
//! Every operation takes the present set by reference and returns a new
//! snapshot; nothing here touches storage. The canonical order of a stored
//! ledger is `(date ascending, id ascending)`.

use crate::error::LedgerError;
use crate::models::{
    Filter, SortDirection, SortKey, Transaction, TransactionInput, TransactionType,
    TransactionWithBalance,
};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

pub const CSV_HEADERS: [&str; 5] = [
    "Date",
    "Details",
    "Salary (PHP)",
    "Expenses (PHP)",
    "Balance (PHP)",
];

/// Largest amount a single entry may carry. Keeps running totals far from
/// the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_316_134_912, 2_328, 0, false, 0);

/// Parse an amount as typed by the user into a positive decimal.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    let amount = trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO || amount > MAX_AMOUNT {
        return Err(LedgerError::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}

/// Validation shared by add and update, in submission order: first-entry
/// rule, then amount, then the details default.
fn validate(
    input: &TransactionInput,
    present: &[Transaction],
) -> Result<(Decimal, String), LedgerError> {
    if present.is_empty() && input.r#type == TransactionType::Expense {
        return Err(LedgerError::FirstEntryMustBeIncome);
    }
    let amount = parse_amount(&input.amount)?;
    let details = if input.details.trim().is_empty() {
        input.r#type.default_details().to_string()
    } else {
        input.details.clone()
    };
    Ok((amount, details))
}

/// Saturating sum; stored data is not guaranteed to respect [`MAX_AMOUNT`].
pub fn accumulate(acc: Decimal, delta: Decimal) -> Decimal {
    acc.checked_add(delta).unwrap_or(if delta.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Two-decimal fixed notation, halves rounded away from zero.
pub fn fmt_amount(d: &Decimal) -> String {
    format!(
        "{:.2}",
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn chronological_cmp(a: &Transaction, b: &Transaction) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id))
}

pub fn sort_chronologically(set: &mut [Transaction]) {
    set.sort_by(chronological_cmp);
}

pub fn add_transaction(
    input: &TransactionInput,
    present: &[Transaction],
) -> Result<Vec<Transaction>, LedgerError> {
    add_transaction_at(input, present, Utc::now(), Uuid::new_v4().to_string())
}

/// Same as [`add_transaction`] with the clock and id supplied by the caller.
pub fn add_transaction_at(
    input: &TransactionInput,
    present: &[Transaction],
    now: DateTime<Utc>,
    id: String,
) -> Result<Vec<Transaction>, LedgerError> {
    let (amount, details) = validate(input, present)?;
    let mut next = present.to_vec();
    next.push(Transaction {
        id,
        date: now,
        r#type: input.r#type,
        amount,
        details,
    });
    sort_chronologically(&mut next);
    Ok(next)
}

/// Replace the entry with `id`, keeping its original id and date.
pub fn update_transaction(
    id: &str,
    input: &TransactionInput,
    present: &[Transaction],
) -> Result<Vec<Transaction>, LedgerError> {
    let (amount, details) = validate(input, present)?;
    let pos = present
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
    let mut next = present.to_vec();
    let target = &mut next[pos];
    target.r#type = input.r#type;
    target.amount = amount;
    target.details = details;
    sort_chronologically(&mut next);
    Ok(next)
}

pub fn delete_transaction(id: &str, present: &[Transaction]) -> Vec<Transaction> {
    present.iter().filter(|t| t.id != id).cloned().collect()
}

pub fn delete_many<S: AsRef<str>>(ids: &[S], present: &[Transaction]) -> Vec<Transaction> {
    let doomed: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
    present
        .iter()
        .filter(|t| !doomed.contains(t.id.as_str()))
        .cloned()
        .collect()
}

/// Attach running balances computed in chronological order, returning the
/// entries in the order the caller supplied them.
pub fn with_running_balance(set: &[Transaction]) -> Vec<TransactionWithBalance> {
    let mut ordered: Vec<&Transaction> = set.iter().collect();
    ordered.sort_by(|a, b| chronological_cmp(a, b));

    let mut running = Decimal::ZERO;
    let balances: HashMap<&str, Decimal> = ordered
        .iter()
        .map(|t| {
            running = accumulate(running, t.r#type.signed(t.amount));
            (t.id.as_str(), running)
        })
        .collect();

    set.iter()
        .map(|t| TransactionWithBalance {
            transaction: t.clone(),
            balance: balances.get(t.id.as_str()).copied().unwrap_or(running),
        })
        .collect()
}

fn primary_cmp(a: &TransactionWithBalance, b: &TransactionWithBalance, key: SortKey) -> Ordering {
    let (ta, tb) = (&a.transaction, &b.transaction);
    match key {
        SortKey::Date => ta.date.cmp(&tb.date),
        SortKey::Details => ta.details.cmp(&tb.details),
        SortKey::Type => ta.r#type.as_str().cmp(tb.r#type.as_str()),
        SortKey::Amount => ta.amount.cmp(&tb.amount),
        SortKey::Balance => a.balance.cmp(&b.balance),
    }
}

/// Sort by `key`; ties fall back to date descending whatever the direction,
/// then to id so that distinct entries never compare equal.
pub fn sort_by(
    mut entries: Vec<TransactionWithBalance>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<TransactionWithBalance> {
    entries.sort_by(|a, b| {
        let primary = primary_cmp(a, b, key);
        let primary = match direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };
        primary
            .then_with(|| b.transaction.date.cmp(&a.transaction.date))
            .then_with(|| a.transaction.id.cmp(&b.transaction.id))
    });
    entries
}

/// Keep entries matching the type and the case-insensitive details search.
pub fn filter(entries: Vec<TransactionWithBalance>, criteria: &Filter) -> Vec<TransactionWithBalance> {
    let needle = criteria
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    entries
        .into_iter()
        .filter(|e| criteria.r#type.is_none_or(|t| e.transaction.r#type == t))
        .filter(|e| {
            needle
                .as_deref()
                .is_none_or(|q| e.transaction.details.to_lowercase().contains(q))
        })
        .collect()
}

/// The stored date string, matching the ISO form the ledger was written with.
pub fn fmt_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn quote_details(details: &str) -> String {
    format!("\"{}\"", details.replace('"', "\"\""))
}

pub fn export_csv(set: &[Transaction]) -> Result<String, LedgerError> {
    if set.is_empty() {
        return Err(LedgerError::NothingToExport);
    }
    let mut ordered = set.to_vec();
    sort_chronologically(&mut ordered);

    // Details carry their own quoting; every other column is plain.
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

    wtr.write_record(CSV_HEADERS).map_err(export_err)?;
    for row in with_running_balance(&ordered) {
        let t = &row.transaction;
        let amount = fmt_amount(&t.amount);
        let (salary, expense) = match t.r#type {
            TransactionType::Salary => (amount, String::new()),
            TransactionType::Expense => (String::new(), amount),
        };
        wtr.write_record([
            fmt_date(&t.date),
            quote_details(&t.details),
            salary,
            expense,
            fmt_amount(&row.balance),
        ])
        .map_err(export_err)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| LedgerError::Export(e.to_string()))
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("Sal-X_Export_{}.csv", today.format("%Y-%m-%d"))
}
