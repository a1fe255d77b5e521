// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use salx::models::{TransactionInput, TransactionType};
use salx::state::AppState;
use salx::store::Store;
use salx::{cli, commands::exporter};
use tempfile::tempdir;

fn csv_matches(out: &str) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(["salx", "export", "csv", "--out", out]);
    match matches.subcommand() {
        Some(("export", export_m)) => match export_m.subcommand() {
            Some(("csv", csv_m)) => csv_m.clone(),
            _ => panic!("no csv subcommand"),
        },
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn export_writes_ledger_with_balances() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    state
        .add_transaction(&TransactionInput::new(TransactionType::Salary, "1000", "Pay"))
        .unwrap();
    state
        .add_transaction(&TransactionInput::new(TransactionType::Expense, "250.5", "Say \"hi\""))
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let written = exporter::export_csv(&state, &csv_matches(&out_str)).unwrap();
    assert_eq!(written.as_deref(), Some(out_path.as_path()));

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Details,Salary (PHP),Expenses (PHP),Balance (PHP)");
    assert!(lines[1].ends_with(",\"Pay\",1000.00,,1000.00"));
    assert!(lines[2].ends_with(",\"Say \"\"hi\"\"\",,250.50,749.50"));
}

#[test]
fn export_of_empty_ledger_writes_nothing() {
    let state = AppState::load(Store::in_memory().unwrap());
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let written = exporter::export_csv(&state, &csv_matches(&out_str)).unwrap();
    assert!(written.is_none());
    assert!(!out_path.exists());
}
