// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::accumulate;
use crate::models::{Summary, Transaction, TransactionType};
use rust_decimal::Decimal;

pub fn summarize(set: &[Transaction]) -> Summary {
    let (total_salary, total_expenses) = set.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(inc, exp), t| match t.r#type {
            TransactionType::Salary => (accumulate(inc, t.amount), exp),
            TransactionType::Expense => (inc, accumulate(exp, t.amount)),
        },
    );
    Summary {
        total_salary,
        total_expenses,
        balance: accumulate(total_salary, -total_expenses),
    }
}
