// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salx::models::{SalaryFrequency, Theme};
use salx::state::AppState;
use salx::store::Store;
use salx::{cli, commands};

fn sub_matches(argv: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some((_, m)) => m.clone(),
        None => panic!("no subcommand"),
    }
}

#[test]
fn profile_edit_saves_draft() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    let m = sub_matches(&[
        "salx", "profile", "edit", "--name", "Mara", "--salary", "42000", "--frequency", "weekly",
        "--picture", "avatar.png",
    ]);
    commands::profile::handle(&mut state, &m).unwrap();
    let p = state.profile();
    assert_eq!(p.name, "Mara");
    assert_eq!(p.salary, Decimal::new(42000, 0));
    assert_eq!(p.salary_frequency, SalaryFrequency::Weekly);
    assert_eq!(p.profile_picture_url.as_deref(), Some("avatar.png"));
    assert_eq!(p.bio, "default bio");
}

#[test]
fn profile_edit_rejects_negative_salary() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    let m = sub_matches(&["salx", "profile", "edit", "--salary", "-10"]);
    assert!(commands::profile::handle(&mut state, &m).is_err());
    assert_eq!(state.profile().salary, Decimal::ZERO);
}

#[test]
fn theme_commands_round_trip() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    commands::preferences::handle_theme(&mut state, &sub_matches(&["salx", "theme", "toggle"]))
        .unwrap();
    assert_eq!(state.theme(), Theme::Light);
    commands::preferences::handle_theme(&mut state, &sub_matches(&["salx", "theme", "set", "dark"]))
        .unwrap();
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn install_prompt_dismissal_sticks() {
    let mut state = AppState::load(Store::in_memory().unwrap());
    commands::preferences::handle_install_prompt(
        &mut state,
        &sub_matches(&["salx", "install-prompt", "dismiss"]),
    )
    .unwrap();
    assert!(state.has_seen_install_prompt());
}
