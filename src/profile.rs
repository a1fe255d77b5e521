// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Profile drafts and the rules applied when one is saved.

use crate::error::LedgerError;
use crate::models::{SalaryFrequency, UserProfile};
use rust_decimal::Decimal;

pub const BIO_WORD_LIMIT: usize = 100;

pub fn bio_word_count(bio: &str) -> usize {
    bio.split_whitespace().count()
}

/// Keep the first [`BIO_WORD_LIMIT`] words. A bio already within the limit
/// is returned untouched.
pub fn truncate_bio(bio: &str) -> String {
    if bio_word_count(bio) <= BIO_WORD_LIMIT {
        return bio.to_string();
    }
    bio.split_whitespace()
        .take(BIO_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical profile to persist for `draft`. Replaces the previous value wholesale.
pub fn save_profile(draft: &UserProfile) -> UserProfile {
    UserProfile {
        bio: truncate_bio(&draft.bio),
        ..draft.clone()
    }
}

pub fn is_dirty(draft: &UserProfile, persisted: &UserProfile) -> bool {
    draft != persisted
}

/// Salary as typed in the editor; zero is allowed, negatives are not.
pub fn parse_salary(raw: &str) -> Result<Decimal, LedgerError> {
    let salary = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(LedgerError::InvalidAmount(raw.to_string()));
    }
    Ok(salary)
}

/// Field-level changes made in the editor. `None` leaves a field as it was;
/// for the image references `Some(None)` clears the image.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub nature_of_work: Option<String>,
    pub salary: Option<Decimal>,
    pub salary_frequency: Option<SalaryFrequency>,
    pub profile_picture_url: Option<Option<String>>,
    pub cover_photo_url: Option<Option<String>>,
}

impl ProfileEdit {
    /// Apply the edits to a draft copy of `persisted`.
    pub fn draft_from(&self, persisted: &UserProfile) -> UserProfile {
        let mut draft = persisted.clone();
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(bio) = &self.bio {
            draft.bio = bio.clone();
        }
        if let Some(work) = &self.nature_of_work {
            draft.nature_of_work = work.clone();
        }
        if let Some(salary) = self.salary {
            draft.salary = salary;
        }
        if let Some(freq) = self.salary_frequency {
            draft.salary_frequency = freq;
        }
        if let Some(pic) = &self.profile_picture_url {
            draft.profile_picture_url = pic.clone();
        }
        if let Some(cover) = &self.cover_photo_url {
            draft.cover_photo_url = cover.clone();
        }
        draft
    }
}
