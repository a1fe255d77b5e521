// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Theme;
use crate::state::AppState;
use anyhow::{Result, anyhow};

pub fn handle_theme(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("toggle", _)) => {
            let theme = state.toggle_theme();
            println!("Theme set to {}", theme);
        }
        Some(("set", sub)) => {
            let theme: Theme = sub
                .get_one::<String>("theme")
                .unwrap()
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            state.set_theme(theme);
            println!("Theme set to {}", theme);
        }
        _ => println!("{}", state.theme()),
    }
    Ok(())
}

pub fn handle_install_prompt(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dismiss", _)) => {
            state.dismiss_install_prompt();
            println!("Install prompt dismissed");
        }
        _ => {
            let status = if state.has_seen_install_prompt() {
                "seen"
            } else {
                "not seen"
            };
            println!("Install prompt: {}", status);
        }
    }
    Ok(())
}
