// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Personal expense ledger with daily and monthly summaries")
        .arg(
            Arg::new("server")
                .long("server")
                .global(true)
                .value_name("URL")
                .help("Talk to an HTTP backend at URL instead of the local database"),
        )
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            json_flags(
                Command::new("list")
                    .about("List ledger items")
                    .arg(
                        Arg::new("month")
                            .long("month")
                            .value_name("YYYY-MM")
                            .help("Only items from this month"),
                    )
                    .arg(
                        Arg::new("category")
                            .long("category")
                            .value_name("CATEGORY")
                            .help("Only items with this category"),
                    )
                    .arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .help("At most this many items"),
                    ),
            ),
        )
        .subcommand(
            Command::new("add")
                .about("Record a ledger item")
                .arg(Arg::new("name").required(true).help("Display label"))
                .arg(Arg::new("value").required(true).help("Signed decimal amount"))
                .arg(Arg::new("category").required(true).help("One of the fixed category codes"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("TIMESTAMP")
                        .help("Creation timestamp; defaults to now"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace every field of an item")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(Arg::new("name").required(true))
                .arg(Arg::new("value").required(true))
                .arg(Arg::new("category").required(true))
                .arg(Arg::new("date").required(true).value_name("TIMESTAMP")),
        )
        .subcommand(
            Command::new("rm").about("Delete an item").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries over the current item set")
                .subcommand(json_flags(Command::new("daily").about("Totals per day")))
                .subcommand(json_flags(
                    Command::new("monthly").about("Totals per month").arg(
                        Arg::new("breakdown")
                            .long("breakdown")
                            .action(ArgAction::SetTrue)
                            .help("Include per-category subtotals"),
                    ),
                ))
                .subcommand(json_flags(
                    Command::new("by-category")
                        .about("Totals per category")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .help("Restrict to one month"),
                        ),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budget amounts")
                .subcommand(
                    Command::new("set")
                        .about("Set (or replace) the budget for a month")
                        .arg(Arg::new("month").required(true).value_name("YYYY-MM"))
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show the budget for a month")
                        .arg(Arg::new("month").required(true).value_name("YYYY-MM")),
                )
                .subcommand(
                    Command::new("report")
                        .about("Budget vs. spend for a month")
                        .arg(Arg::new("month").required(true).value_name("YYYY-MM")),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import items from a JSON array")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Export items")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true).value_name("PATH")),
        )
        .subcommand(
            Command::new("doctor").about("Check the local database for invariant violations"),
        )
}
