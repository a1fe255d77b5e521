// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger::export_file_name;
use crate::state::AppState;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(state, sub).map(|_| ()),
        _ => Ok(()),
    }
}

/// Writes the export and returns its path, or `None` when there was nothing to export.
pub fn export_csv(state: &AppState, sub: &clap::ArgMatches) -> Result<Option<PathBuf>> {
    let content = match state.export_csv() {
        Ok(c) => c,
        Err(LedgerError::NothingToExport) => {
            println!("{}", LedgerError::NothingToExport);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let out = sub
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
    std::fs::write(&out, content).with_context(|| format!("Write {}", out.display()))?;
    println!("Exported transactions to {}", out.display());
    Ok(Some(out))
}
