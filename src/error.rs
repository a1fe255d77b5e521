// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejections raised by ledger operations. None of them leave the ledger
/// in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Please enter a valid, positive amount (got '{0}')")]
    InvalidAmount(String),
    #[error(
        "Your first transaction must be a salary entry. Please add an income source before recording an expense."
    )]
    FirstEntryMustBeIncome,
    #[error("Transaction '{0}' not found")]
    NotFound(String),
    #[error("No transactions to export.")]
    NothingToExport,
    #[error("CSV export failed: {0}")]
    Export(String),
}

/// Storage failures. These never escape the store; they are logged and the
/// in-memory value stays authoritative.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] rusqlite::Error),
    #[error("malformed entry '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize entry '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
