// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state owned by a single coordinator.
//!
//! Mutations build the next snapshot through the ledger and profile rules,
//! swap it in, then persist it. A rejected mutation leaves everything as it
//! was. Persistence is best-effort (see [`Store`]).

use crate::error::LedgerError;
use crate::ledger;
use crate::models::{
    Filter, SortDirection, SortKey, Summary, Theme, Transaction, TransactionInput,
    TransactionWithBalance, UserProfile,
};
use crate::profile;
use crate::store::{Store, keys};
use crate::summary::summarize;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

pub struct AppState {
    store: Store,
    transactions: Vec<Transaction>,
    profile: UserProfile,
    theme: Theme,
    has_entered: bool,
    has_seen_install_prompt: bool,
}

impl AppState {
    pub fn load(store: Store) -> Self {
        let mut transactions: Vec<Transaction> = store.load(keys::TRANSACTIONS, Vec::new());
        ledger::sort_chronologically(&mut transactions);
        let profile = store.load(keys::USER_PROFILE, UserProfile::default());
        let theme = store.load(keys::THEME, Theme::default());
        let has_entered = store.load(keys::HAS_ENTERED, false);
        let has_seen_install_prompt = store.load(keys::HAS_SEEN_INSTALL_PROMPT, false);
        Self {
            store,
            transactions,
            profile,
            theme,
            has_entered,
            has_seen_install_prompt,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    fn commit_transactions(&mut self, next: Vec<Transaction>) {
        self.transactions = next;
        self.store.save(keys::TRANSACTIONS, &self.transactions);
    }

    /// Returns the newly created transaction.
    pub fn add_transaction(&mut self, input: &TransactionInput) -> Result<&Transaction, LedgerError> {
        let id = Uuid::new_v4().to_string();
        let next = ledger::add_transaction_at(input, &self.transactions, Utc::now(), id.clone())?;
        self.commit_transactions(next);
        info!(id = %id, "transaction added");
        self.find(&id).ok_or(LedgerError::NotFound(id))
    }

    pub fn update_transaction(
        &mut self,
        id: &str,
        input: &TransactionInput,
    ) -> Result<&Transaction, LedgerError> {
        let next = ledger::update_transaction(id, input, &self.transactions)?;
        self.commit_transactions(next);
        info!(id, "transaction updated");
        self.find(id).ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    /// Returns whether anything was removed.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        let next = ledger::delete_transaction(id, &self.transactions);
        let removed = next.len() != before;
        if removed {
            self.commit_transactions(next);
            info!(id, "transaction deleted");
        }
        removed
    }

    /// Returns how many entries were removed.
    pub fn delete_many<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let before = self.transactions.len();
        let next = ledger::delete_many(ids, &self.transactions);
        let removed = before - next.len();
        if removed > 0 {
            self.commit_transactions(next);
            info!(removed, "transactions deleted");
        }
        removed
    }

    /// Running balances over the whole ledger, filtered then sorted for display.
    pub fn ledger_view(
        &self,
        key: SortKey,
        direction: SortDirection,
        criteria: &Filter,
    ) -> Vec<TransactionWithBalance> {
        let entries = ledger::with_running_balance(&self.transactions);
        ledger::sort_by(ledger::filter(entries, criteria), key, direction)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.transactions)
    }

    pub fn export_csv(&self) -> Result<String, LedgerError> {
        ledger::export_csv(&self.transactions)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn save_profile(&mut self, draft: &UserProfile) -> &UserProfile {
        self.profile = profile::save_profile(draft);
        self.store.save(keys::USER_PROFILE, &self.profile);
        info!("profile saved");
        &self.profile
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(keys::THEME, &self.theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn has_entered(&self) -> bool {
        self.has_entered
    }

    pub fn mark_entered(&mut self) {
        self.has_entered = true;
        self.store.save(keys::HAS_ENTERED, &self.has_entered);
    }

    pub fn has_seen_install_prompt(&self) -> bool {
        self.has_seen_install_prompt
    }

    pub fn dismiss_install_prompt(&mut self) {
        self.has_seen_install_prompt = true;
        self.store
            .save(keys::HAS_SEEN_INSTALL_PROMPT, &self.has_seen_install_prompt);
    }
}
