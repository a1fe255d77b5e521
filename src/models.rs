// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Salary,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Salary => "salary",
            TransactionType::Expense => "expense",
        }
    }

    /// Label used when a transaction is submitted without details.
    pub fn default_details(&self) -> &'static str {
        match self {
            TransactionType::Salary => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// Signed contribution of `amount` to a running balance.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Salary => amount,
            TransactionType::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salary" | "income" => Ok(TransactionType::Salary),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub details: String,
}

/// Form data as submitted: the amount is still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub r#type: TransactionType,
    pub amount: String,
    pub details: String,
}

impl TransactionInput {
    pub fn new(r#type: TransactionType, amount: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            r#type,
            amount: amount.into(),
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionWithBalance {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Details,
    Type,
    Amount,
    Balance,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "details" => Ok(SortKey::Details),
            "type" => Ok(SortKey::Type),
            "amount" => Ok(SortKey::Amount),
            "balance" => Ok(SortKey::Balance),
            other => Err(format!("Unknown sort key '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub r#type: Option<TransactionType>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryFrequency {
    Weekly,
    #[default]
    Monthly,
}

impl FromStr for SalaryFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(SalaryFrequency::Weekly),
            "monthly" => Ok(SalaryFrequency::Monthly),
            other => Err(format!("Unknown salary frequency '{}'", other)),
        }
    }
}

impl fmt::Display for SalaryFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryFrequency::Weekly => f.write_str("weekly"),
            SalaryFrequency::Monthly => f.write_str("monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub bio: String,
    pub nature_of_work: String,
    pub salary: Decimal,
    pub salary_frequency: SalaryFrequency,
    pub profile_picture_url: Option<String>,
    pub cover_photo_url: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "default user".to_string(),
            bio: "default bio".to_string(),
            nature_of_work: String::new(),
            salary: Decimal::ZERO,
            salary_frequency: SalaryFrequency::Monthly,
            profile_picture_url: None,
            cover_photo_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_salary: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}
