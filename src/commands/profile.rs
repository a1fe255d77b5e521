// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::SalaryFrequency;
use crate::profile::{BIO_WORD_LIMIT, ProfileEdit, bio_word_count, is_dirty, parse_salary};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(state, sub)?,
        Some(("edit", sub)) => edit(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let p = state.profile();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), p)? {
        return Ok(());
    }
    let or_unset = |s: &str| {
        if s.is_empty() {
            "Not specified.".to_string()
        } else {
            s.to_string()
        }
    };
    let salary = if p.salary.is_zero() {
        "Not specified.".to_string()
    } else {
        format!("{} {}", fmt_money(&p.salary), p.salary_frequency)
    };
    let rows = vec![
        vec!["Name".into(), p.name.clone()],
        vec!["Bio".into(), or_unset(&p.bio)],
        vec!["Nature of Work".into(), or_unset(&p.nature_of_work)],
        vec!["Salary".into(), salary],
        vec![
            "Profile Picture".into(),
            p.profile_picture_url.clone().unwrap_or_default(),
        ],
        vec!["Cover Photo".into(), p.cover_photo_url.clone().unwrap_or_default()],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows, &[]));
    Ok(())
}

fn image_ref(sub: &clap::ArgMatches, name: &str) -> Option<Option<String>> {
    sub.get_one::<String>(name).map(|s| {
        if s.eq_ignore_ascii_case("none") || s.is_empty() {
            None
        } else {
            Some(s.clone())
        }
    })
}

pub fn edit_from(sub: &clap::ArgMatches) -> Result<ProfileEdit> {
    let salary = sub
        .get_one::<String>("salary")
        .map(|s| parse_salary(s))
        .transpose()?;
    let salary_frequency = sub
        .get_one::<String>("frequency")
        .map(|s| s.parse::<SalaryFrequency>())
        .transpose()
        .map_err(|e| anyhow!(e))?;
    Ok(ProfileEdit {
        name: sub.get_one::<String>("name").cloned(),
        bio: sub.get_one::<String>("bio").cloned(),
        nature_of_work: sub.get_one::<String>("work").cloned(),
        salary,
        salary_frequency,
        profile_picture_url: image_ref(sub, "picture"),
        cover_photo_url: image_ref(sub, "cover"),
    })
}

fn edit(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let draft = edit_from(sub)?.draft_from(state.profile());
    if !is_dirty(&draft, state.profile()) {
        println!("No changes to save.");
        return Ok(());
    }
    let words = bio_word_count(&draft.bio);
    if words > BIO_WORD_LIMIT {
        println!(
            "Bio has {} words; keeping the first {}.",
            words, BIO_WORD_LIMIT
        );
    }
    let saved = state.save_profile(&draft);
    println!("Saved profile for {}", saved.name);
    Ok(())
}
