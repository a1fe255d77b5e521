// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

const TX_TYPES: [&str; 2] = ["salary", "expense"];
const SORT_KEYS: [&str; 5] = ["date", "details", "type", "amount", "balance"];

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn entry_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .short('t')
            .required(true)
            .value_parser(TX_TYPES),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .short('a')
            .required(true)
            .allow_negative_numbers(true)
            .help("Amount in PHP, e.g. 1250.50"),
    )
    .arg(
        Arg::new("details")
            .long("details")
            .short('d')
            .default_value("")
            .help("Label; defaults to Income/Expense when empty"),
    )
}

pub fn build_cli() -> Command {
    Command::new("salx")
        .version(crate_version!())
        .about("Sal-X: track salary and expenses with running balances")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Use this database file instead of the default data dir"),
        )
        .subcommand(Command::new("init").about("Create the data store and enter the app"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(entry_args(Command::new("add").about("Record a salary or expense")))
                .subcommand(entry_args(
                    Command::new("edit")
                        .about("Edit a transaction; its date is kept")
                        .arg(Arg::new("id").required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("rm-many")
                        .about("Delete several transactions")
                        .arg(Arg::new("ids").required(true).num_args(1..)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions with running balances")
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .default_value("date")
                                .value_parser(SORT_KEYS),
                        )
                        .arg(
                            Arg::new("asc")
                                .long("asc")
                                .action(ArgAction::SetTrue)
                                .help("Oldest/lowest first; newest first otherwise"),
                        )
                        .arg(Arg::new("type").long("type").value_parser(TX_TYPES))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on details"),
                        ),
                )),
        )
        .subcommand(json_flags(Command::new("summary").about("Total salary, expenses and balance")))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("csv").about("Export the ledger as CSV").arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path; defaults to Sal-X_Export_<date>.csv"),
                ),
            ),
        )
        .subcommand(
            Command::new("profile")
                .about("User profile")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("bio").long("bio").help("Capped at 100 words on save"))
                        .arg(Arg::new("work").long("work").help("Nature of work"))
                        .arg(Arg::new("salary").long("salary").allow_negative_numbers(true))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_parser(["weekly", "monthly"]),
                        )
                        .arg(
                            Arg::new("picture")
                                .long("picture")
                                .help("Profile picture reference; 'none' clears it"),
                        )
                        .arg(
                            Arg::new("cover")
                                .long("cover")
                                .help("Cover photo reference; 'none' clears it"),
                        ),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Light/dark preference")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("toggle"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("theme").required(true).value_parser(["light", "dark"])),
                ),
        )
        .subcommand(
            Command::new("install-prompt")
                .about("Install prompt state")
                .subcommand(Command::new("status"))
                .subcommand(Command::new("dismiss")),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for inconsistencies"))
}
