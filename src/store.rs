// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Best-effort key-value persistence.
//!
//! Each piece of application state lives under its own key as a JSON value.
//! Reads fall back to the caller's default and writes swallow their errors;
//! both are logged.

use crate::db;
use crate::error::StoreError;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const USER_PROFILE: &str = "user-profile";
    pub const THEME: &str = "theme";
    pub const HAS_ENTERED: &str = "has-entered";
    pub const HAS_SEEN_INSTALL_PROMPT: &str = "has-seen-install-prompt";
}

pub struct Store {
    conn: Option<Connection>,
    persistent: bool,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = db::open(path)?;
        Ok(Self {
            conn: Some(conn),
            persistent: true,
        })
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = db::open_in_memory()?;
        Ok(Self {
            conn: Some(conn),
            persistent: false,
        })
    }

    /// A store with no backing database: every load yields its default and
    /// every save is dropped.
    pub fn unavailable() -> Self {
        Self {
            conn: None,
            persistent: false,
        }
    }

    /// Open `path`, degrading to an in-memory database for this session when
    /// the file cannot be used.
    pub fn open_or_fallback(path: &Path) -> Self {
        match Self::open(path) {
            Ok(store) => store,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "storage unavailable, changes will not be kept");
                Self::memory_or_unavailable()
            }
        }
    }

    /// Store for the `--db` override or the platform data dir. When no usable
    /// path can be worked out the session runs in memory; the path is `None`
    /// in that case.
    pub fn open_configured(overridden: Option<&str>) -> (Self, Option<PathBuf>) {
        match db::resolve_path(overridden) {
            Ok(path) => (Self::open_or_fallback(&path), Some(path)),
            Err(e) => {
                warn!(error = %e, "no data dir, changes will not be kept");
                (Self::memory_or_unavailable(), None)
            }
        }
    }

    fn memory_or_unavailable() -> Self {
        Self::in_memory().unwrap_or_else(|e| {
            warn!(error = %e, "in-memory storage unavailable");
            Self::unavailable()
        })
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(conn) = &self.conn else {
            return Ok(None);
        };
        let raw: Option<String> = conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        raw.map(|s| {
            serde_json::from_str(&s).map_err(|source| StoreError::Malformed {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(v)) => v,
            Ok(None) => {
                debug!(key, "no stored value, using default");
                default
            }
            Err(e) => {
                warn!(key, error = %e, "unreadable stored value, using default");
                default
            }
        }
    }

    pub fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let Some(conn) = &self.conn else {
            return Ok(());
        };
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, json],
        )?;
        Ok(())
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        match self.try_save(key, value) {
            Ok(()) => debug!(key, "saved"),
            Err(e) => warn!(key, error = %e, "could not persist value"),
        }
    }
}
