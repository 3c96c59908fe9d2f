// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::report::MonthlyReport;
use crate::store::ProfileStore;
use crate::utils::{as_of_date, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::Datelike;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = as_of_date(sub)?;
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => (today.year(), today.month()),
    };

    let derived = engine.derived(today);
    let report = MonthlyReport::build(engine.profile(), derived, year, month);

    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    let ccy = report.currency.code();
    println!(
        "Report for {} {:04}-{:02} ({} {} income, {} fixed)",
        report.user_name, report.year, report.month, ccy, report.monthly_income, report.fixed_expenses
    );
    let rows = report
        .category_totals
        .iter()
        .map(|t| {
            vec![
                format!("{:?}", t.category).to_lowercase(),
                format!("{:.2}", t.total),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], rows));
    println!(
        "Variable spend {:.2}; total spent {:.2}; saved {:.2} ({}%)",
        report.total_variable_spent,
        report.derived.spent,
        report.derived.saved,
        report.derived.actual_savings_rate
    );
    Ok(())
}
