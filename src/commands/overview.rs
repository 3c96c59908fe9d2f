// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::store::ProfileStore;
use crate::utils::{as_of_date, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = as_of_date(sub)?;

    let profile = engine.profile();
    if !profile.onboarding_complete {
        println!("No profile yet. Run 'pocketclip setup' first.");
        return Ok(());
    }

    let derived = engine.derived(today);
    if maybe_print_json(json_flag, jsonl_flag, &derived)? {
        return Ok(());
    }

    let ccy = profile.currency.code();
    let rows = vec![
        vec!["Income".into(), fmt_money(&profile.monthly_income, ccy)],
        vec!["Fixed expenses".into(), fmt_money(&profile.fixed_expenses, ccy)],
        vec![
            "Savings target".into(),
            format!(
                "{} ({}%)",
                fmt_money(&derived.target_savings_amount, ccy),
                profile.savings_target_percentage
            ),
        ],
        vec![
            "Available for spending".into(),
            fmt_money(&derived.available_for_spending, ccy),
        ],
        vec!["Spent this month".into(), fmt_money(&derived.spent, ccy)],
        vec![
            "Saved so far".into(),
            format!("{} ({}%)", fmt_money(&derived.saved, ccy), derived.actual_savings_rate),
        ],
        vec![
            "Days left".into(),
            format!("{} of {}", derived.days_left, derived.days_in_month),
        ],
        vec!["Daily budget".into(), fmt_money(&derived.daily_budget, ccy)],
    ];
    println!("{}", pretty_table(&["", &today.format("%B %Y").to_string()], rows));
    Ok(())
}
