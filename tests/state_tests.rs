// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salx::error::LedgerError;
use salx::models::{Theme, TransactionInput, TransactionType, UserProfile};
use salx::state::AppState;
use salx::store::{Store, keys};
use tempfile::tempdir;

#[test]
fn fresh_state_uses_documented_defaults() {
    let state = AppState::load(Store::in_memory().unwrap());
    assert!(state.transactions().is_empty());
    assert_eq!(state.profile(), &UserProfile::default());
    assert_eq!(state.profile().name, "default user");
    assert_eq!(state.theme(), Theme::Dark);
    assert!(!state.has_entered());
    assert!(!state.has_seen_install_prompt());
}

#[test]
fn ledger_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("salx.sqlite");

    let id = {
        let mut state = AppState::load(Store::open(&path).unwrap());
        let t = state
            .add_transaction(&TransactionInput::new(TransactionType::Salary, "1500", "Pay"))
            .unwrap();
        let id = t.id.clone();
        state
            .add_transaction(&TransactionInput::new(TransactionType::Expense, "99.90", ""))
            .unwrap();
        state.toggle_theme();
        state.mark_entered();
        id
    };

    let state = AppState::load(Store::open(&path).unwrap());
    assert_eq!(state.transactions().len(), 2);
    assert_eq!(state.transactions()[0].id, id);
    assert_eq!(state.transactions()[1].details, "Expense");
    assert_eq!(state.summary().balance, "1400.10".parse::<Decimal>().unwrap());
    assert_eq!(state.theme(), Theme::Light);
    assert!(state.has_entered());
}

#[test]
fn rejected_mutation_leaves_state_untouched() {
    let store = Store::in_memory().unwrap();
    let mut state = AppState::load(store);
    let err = state
        .add_transaction(&TransactionInput::new(TransactionType::Expense, "10", ""))
        .unwrap_err();
    assert_eq!(err, LedgerError::FirstEntryMustBeIncome);
    assert!(state.transactions().is_empty());
    assert!(state.store().try_load::<Vec<serde_json::Value>>(keys::TRANSACTIONS).unwrap().is_none());
}

#[test]
fn deletes_are_persisted_and_benign_when_missing() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    let mut ids = Vec::new();
    for amount in ["10", "20", "30"] {
        let t = state
            .add_transaction(&TransactionInput::new(TransactionType::Salary, amount, ""))
            .unwrap();
        ids.push(t.id.clone());
    }
    assert!(!state.delete_transaction("missing"));
    assert!(state.delete_transaction(&ids[0]));
    assert_eq!(state.delete_many(&[ids[1].clone(), "ghost".to_string()]), 1);
    assert_eq!(state.transactions().len(), 1);

    let stored: Vec<salx::models::Transaction> =
        state.store().load(keys::TRANSACTIONS, Vec::new());
    assert_eq!(stored, state.transactions());
}

#[test]
fn edit_of_missing_transaction_is_reported() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    state
        .add_transaction(&TransactionInput::new(TransactionType::Salary, "10", ""))
        .unwrap();
    let err = state
        .update_transaction("ghost", &TransactionInput::new(TransactionType::Salary, "5", ""))
        .unwrap_err();
    assert_eq!(err, LedgerError::NotFound("ghost".into()));
}

#[test]
fn saved_profile_keeps_first_hundred_bio_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("salx.sqlite");
    let bio: Vec<String> = (1..=150).map(|i| format!("w{i}")).collect();
    {
        let mut state = AppState::load(Store::open(&path).unwrap());
        let draft = UserProfile {
            name: "Ana".into(),
            bio: bio.join(" "),
            ..UserProfile::default()
        };
        state.save_profile(&draft);
    }
    let state = AppState::load(Store::open(&path).unwrap());
    assert_eq!(state.profile().name, "Ana");
    assert_eq!(state.profile().bio, bio[..100].join(" "));
}

#[test]
fn unavailable_store_keeps_session_in_memory() {
    let mut state = AppState::load(Store::unavailable());
    state
        .add_transaction(&TransactionInput::new(TransactionType::Salary, "10", ""))
        .unwrap();
    state.dismiss_install_prompt();
    assert_eq!(state.transactions().len(), 1);
    assert!(state.has_seen_install_prompt());
    assert!(!state.store().is_persistent());
}

#[test]
fn unopenable_path_falls_back_to_memory() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened as a database file
    let store = Store::open_or_fallback(dir.path());
    assert!(!store.is_persistent());
    let state = AppState::load(store);
    assert!(state.transactions().is_empty());
}

#[test]
fn unusable_db_dir_still_runs_in_memory() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let db = blocker.join("nested").join("salx.sqlite");

    let (store, path) = Store::open_configured(Some(db.to_str().unwrap()));
    assert!(path.is_none());
    assert!(!store.is_persistent());

    let mut state = AppState::load(store);
    state
        .add_transaction(&TransactionInput::new(TransactionType::Salary, "10", ""))
        .unwrap();
    assert_eq!(state.transactions().len(), 1);
}

#[test]
fn configured_path_is_used_when_writable() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("data").join("salx.sqlite");
    let (store, path) = Store::open_configured(Some(db.to_str().unwrap()));
    assert_eq!(path.as_deref(), Some(db.as_path()));
    assert!(store.is_persistent());
}
