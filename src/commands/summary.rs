// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let s = state.summary();
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Total Salary".to_string(), fmt_money(&s.total_salary)],
            vec!["Total Expenses".to_string(), fmt_money(&s.total_expenses)],
            vec!["Balance".to_string(), fmt_money(&s.balance)],
        ];
        println!("{}", pretty_table(&["", "Amount"], rows, &[1]));
    }
    Ok(())
}
