// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use salx::{cli, commands, state::AppState, store::Store};

fn setup_logging() {
    let filter = EnvFilter::try_from_env("SALX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let (store, path) = Store::open_configured(matches.get_one::<String>("db").map(String::as_str));
    let mut state = AppState::load(store);

    match matches.subcommand() {
        Some(("init", _)) => {
            state.mark_entered();
            match path.filter(|_| state.store().is_persistent()) {
                Some(p) => println!("Welcome to Sal-X. Data is stored at {}", p.display()),
                None => println!("Welcome to Sal-X. Storage is unavailable; data lasts this session only."),
            }
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut state, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("profile", sub)) => commands::profile::handle(&mut state, sub)?,
        Some(("theme", sub)) => commands::preferences::handle_theme(&mut state, sub)?,
        Some(("install-prompt", sub)) => {
            commands::preferences::handle_install_prompt(&mut state, sub)?
        }
        Some(("doctor", _)) => commands::doctor::handle(&state)?,
        _ => {
            if !state.has_entered() {
                println!("Welcome to Sal-X! Run `salx init` to get started.");
            }
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
