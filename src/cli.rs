// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn with_output_flags(cmd: Command) -> Command {
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

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Evaluate as of this date (YYYY-MM-DD, default today)")
}

pub fn build_cli() -> Command {
    Command::new("pocketclip")
        .about("Personal finance profile: goals, bills, subscriptions, budgets, monthly reports")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the profile store and print its path"))
        .subcommand(
            Command::new("setup")
                .about("Onboarding: set the profile basics and mark onboarding complete")
                .arg(Arg::new("name").long("name").required(true).help("Display name"))
                .arg(Arg::new("income").long("income").required(true).help("Monthly income"))
                .arg(
                    Arg::new("savings-target")
                        .long("savings-target")
                        .default_value("20")
                        .help("Savings target percentage (0-100)"),
                )
                .arg(
                    Arg::new("vibe")
                        .long("vibe")
                        .default_value("figuring-out")
                        .help("control|save|invest|figuring-out"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .default_value("USD")
                        .help("Display currency code"),
                ),
        )
        .subcommand(with_output_flags(
            Command::new("overview")
                .about("Derived financials for the current month")
                .arg(date_arg()),
        ))
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("target").required(true).help("Target amount"))
                        .arg(Arg::new("deadline").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("current").long("current").default_value("0"))
                        .arg(Arg::new("category").long("category").default_value("general")),
                )
                .subcommand(with_output_flags(Command::new("list")))
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("target").long("target"))
                        .arg(Arg::new("current").long("current"))
                        .arg(Arg::new("deadline").long("deadline"))
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true)))
                .subcommand(
                    Command::new("extra")
                        .about("Put extra money toward a goal (capped at its target)")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("bill")
                .about("Recurring bills and reminders")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(Arg::new("due-day").required(true).help("Day of month, 1-31"))
                        .arg(Arg::new("category").long("category").default_value("other"))
                        .arg(
                            Arg::new("one-off")
                                .long("one-off")
                                .action(ArgAction::SetTrue)
                                .help("Not recurring"),
                        )
                        .arg(
                            Arg::new("reminder-days")
                                .long("reminder-days")
                                .default_value("3"),
                        ),
                )
                .subcommand(with_output_flags(Command::new("list")))
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("due-day").long("due-day"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("reminder-days").long("reminder-days"))
                        .arg(
                            Arg::new("unpaid")
                                .long("unpaid")
                                .action(ArgAction::SetTrue)
                                .help("Re-arm a paid bill"),
                        ),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true)))
                .subcommand(
                    Command::new("pay")
                        .arg(Arg::new("id").required(true))
                        .arg(date_arg()),
                )
                .subcommand(with_output_flags(
                    Command::new("due")
                        .about("Unpaid bills within their reminder window")
                        .arg(date_arg()),
                )),
        )
        .subcommand(
            Command::new("sub")
                .about("Subscriptions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("cycle")
                                .long("cycle")
                                .default_value("monthly")
                                .help("weekly|monthly|quarterly|yearly"),
                        )
                        .arg(
                            Arg::new("next-billing")
                                .long("next-billing")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("category").long("category").default_value("other"))
                        .arg(Arg::new("last-used").long("last-used").help("YYYY-MM-DD")),
                )
                .subcommand(with_output_flags(Command::new("list")))
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("cycle").long("cycle"))
                        .arg(Arg::new("next-billing").long("next-billing"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("last-used").long("last-used"))
                        .arg(
                            Arg::new("cancel")
                                .long("cancel")
                                .action(ArgAction::SetTrue)
                                .help("Mark inactive"),
                        ),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true)))
                .subcommand(with_output_flags(
                    Command::new("forgotten")
                        .about("Active subscriptions unused for 30+ days")
                        .arg(date_arg()),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Category budgets and their spending entries")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("limit").required(true).help("Monthly limit"))
                        .arg(Arg::new("category").long("category").default_value("other")),
                )
                .subcommand(with_output_flags(Command::new("list")))
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("limit").long("limit"))
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a budget and its spending entries")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("entry")
                        .subcommand(
                            Command::new("add")
                                .arg(Arg::new("budget-id").required(true))
                                .arg(Arg::new("name").required(true))
                                .arg(Arg::new("amount").required(true))
                                .arg(date_arg()),
                        )
                        .subcommand(
                            Command::new("update")
                                .arg(Arg::new("id").required(true))
                                .arg(Arg::new("budget-id").long("budget-id"))
                                .arg(Arg::new("name").long("name"))
                                .arg(Arg::new("amount").long("amount"))
                                .arg(date_arg()),
                        )
                        .subcommand(Command::new("delete").arg(Arg::new("id").required(true)))
                        .subcommand(with_output_flags(
                            Command::new("list").arg(Arg::new("budget-id").long("budget-id")),
                        )),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Variable expense log for the month")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("other")
                                .help("food|transport|entertainment|shopping|health|other"),
                        )
                        .arg(date_arg()),
                )
                .subcommand(Command::new("remove").arg(Arg::new("id").required(true)))
                .subcommand(with_output_flags(
                    Command::new("list").arg(Arg::new("month").long("month").help("YYYY-MM")),
                )),
        )
        .subcommand(
            Command::new("settings")
                .about("Profile settings and fixed expense breakdown")
                .subcommand(with_output_flags(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("income").long("income"))
                        .arg(Arg::new("savings-target").long("savings-target"))
                        .arg(Arg::new("vibe").long("vibe"))
                        .arg(Arg::new("currency").long("currency")),
                )
                .subcommand(
                    Command::new("fixed-add")
                        .about("Add a fixed expense item")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("other")
                                .help("rent|utilities|subscriptions|insurance|other"),
                        ),
                )
                .subcommand(
                    Command::new("fixed-remove")
                        .about("Remove a fixed expense item")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(with_output_flags(
            Command::new("report")
                .about("Monthly report data for external renderers")
                .arg(Arg::new("month").long("month").help("YYYY-MM, default current"))
                .arg(date_arg()),
        ))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(Arg::new("month").long("month").help("YYYY-MM filter")),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Discard the profile and start over")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Skip confirmation"),
                ),
        )
}
