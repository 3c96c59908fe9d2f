// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{NewMonthlyExpense, VariableExpenseCategory};
use crate::store::ProfileStore;
use crate::utils::{as_of_date, in_month, maybe_print_json, parse_decimal, parse_month, pretty_table};
use anyhow::Result;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(engine, sub)?,
        Some(("remove", sub)) => remove(engine, sub)?,
        Some(("list", sub)) => list(engine, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category: VariableExpenseCategory = sub
        .get_one::<String>("category")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let date = as_of_date(sub)?;
    engine.add_monthly_expense(NewMonthlyExpense {
        name: name.clone(),
        amount,
        category,
        date,
    })?;
    println!("Logged {} for '{}' on {}", amount, name, date);
    Ok(())
}

fn remove<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    engine.remove_monthly_expense(id)?;
    println!("Removed expense {}", id);
    Ok(())
}

fn list<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let window = match sub.get_one::<String>("month") {
        Some(s) => Some(parse_month(s)?),
        None => None,
    };
    let entries: Vec<_> = engine
        .profile()
        .monthly_expenses
        .iter()
        .filter(|e| window.map_or(true, |(y, m)| in_month(e.date, y, m)))
        .collect();
    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.date.to_string(),
                e.name.clone(),
                format!("{:?}", e.category).to_lowercase(),
                format!("{:.2}", e.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Date", "Name", "Category", "Amount"], rows)
    );
    Ok(())
}
