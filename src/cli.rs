// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};

use crate::aggregate::{DEFAULT_TREND_BUCKETS, DEFAULT_TREND_WINDOW_DAYS};
use crate::models::Category;

fn category_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(Category::ALL.map(|c| c.as_str()))
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn as_of_arg() -> Arg {
    Arg::new("as-of")
        .long("as-of")
        .value_name("YYYY-MM-DD")
        .help("Evaluate as of this date instead of today")
}

fn amount_arg(required: bool) -> Arg {
    Arg::new("amount")
        .long("amount")
        .short('a')
        .required(required)
        .allow_negative_numbers(true)
        .help("Amount spent, a positive number")
}

fn expense_field_args(required: bool) -> [Arg; 4] {
    [
        amount_arg(required),
        Arg::new("category")
            .long("category")
            .short('c')
            .value_parser(category_parser())
            .help("Spending category (default: food)"),
        Arg::new("description")
            .long("description")
            .short('d')
            .help("What the expense was for"),
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .help("Date of the expense (default: today)"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Track expenses, set monthly category budgets, and review spending trends")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Use this database file instead of the platform default"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Add an expense")
                        .args(expense_field_args(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit an expense; omitted fields keep their value")
                        .arg(Arg::new("id").required(true))
                        .args(expense_field_args(false)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one expense")
                        .arg(Arg::new("id").required(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .value_parser(category_parser()),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly per-category budgets")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly limit for a category")
                        .arg(
                            Arg::new("category")
                                .required(true)
                                .value_parser(category_parser()),
                        )
                        .arg(
                            Arg::new("limit")
                                .required(true)
                                .allow_negative_numbers(true),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("Budget status for the current month")
                        .arg(as_of_arg())
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Include categories without a budget"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("trends")
                .about("Spending summary, category breakdown, and daily totals")
                .arg(as_of_arg())
                .arg(
                    Arg::new("window-days")
                        .long("window-days")
                        .value_parser(value_parser!(u32))
                        .help(format!("Trailing window in days (default: {})", DEFAULT_TREND_WINDOW_DAYS)),
                )
                .arg(
                    Arg::new("max-buckets")
                        .long("max-buckets")
                        .value_parser(value_parser!(usize))
                        .help(format!("Most recent days to chart (default: {})", DEFAULT_TREND_BUCKETS)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Spending categories")
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Display settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-currency")
                        .arg(Arg::new("currency").required(true)),
                ),
        )
}
