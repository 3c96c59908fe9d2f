// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{Currency, FinancialVibe, FixedExpenseCategory, NewExpenseItem, ProfilePatch};
use crate::store::ProfileStore;
use crate::utils::{maybe_print_json, opt_decimal, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(engine, sub)?,
        Some(("set", sub)) => set(engine, sub)?,
        Some(("fixed-add", sub)) => fixed_add(engine, sub)?,
        Some(("fixed-remove", sub)) => fixed_remove(engine, sub)?,
        _ => {}
    }
    Ok(())
}

fn show<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let p = engine.profile();
    if maybe_print_json(json_flag, jsonl_flag, p)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Name".into(), p.name.clone()],
        vec!["Onboarded".into(), p.onboarding_complete.to_string()],
        vec!["Income".into(), format!("{:.2}", p.monthly_income)],
        vec!["Fixed expenses".into(), format!("{:.2}", p.fixed_expenses)],
        vec!["Savings target".into(), format!("{}%", p.savings_target_percentage)],
        vec!["Currency".into(), p.currency.code().into()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    if !p.expense_breakdown.is_empty() {
        let rows = p
            .expense_breakdown
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.name.clone(),
                    format!("{:?}", e.category).to_lowercase(),
                    format!("{:.2}", e.amount),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Fixed expense", "Category", "Amount"], rows));
    }
    Ok(())
}

fn set<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let savings_target_percentage = match sub.get_one::<String>("savings-target") {
        Some(s) => Some(
            s.parse::<u32>()
                .context("Invalid savings target, expected a whole percentage")?,
        ),
        None => None,
    };
    let financial_vibe = match sub.get_one::<String>("vibe") {
        Some(s) => Some(s.parse::<FinancialVibe>().map_err(anyhow::Error::msg)?),
        None => None,
    };
    let currency = match sub.get_one::<String>("currency") {
        Some(s) => Some(s.parse::<Currency>().map_err(anyhow::Error::msg)?),
        None => None,
    };
    engine.set_profile(ProfilePatch {
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        monthly_income: opt_decimal(sub, "income")?,
        savings_target_percentage,
        financial_vibe,
        currency,
        ..Default::default()
    })?;
    println!("Settings updated");
    Ok(())
}

fn fixed_add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category: FixedExpenseCategory = sub
        .get_one::<String>("category")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let profile = engine.add_expense_item(NewExpenseItem {
        name: name.clone(),
        amount,
        category,
    })?;
    println!(
        "Added fixed expense '{}' ({}); fixed total now {:.2}",
        name, amount, profile.fixed_expenses
    );
    Ok(())
}

fn fixed_remove<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let profile = engine.remove_expense_item(id)?;
    println!(
        "Removed fixed expense {}; fixed total now {:.2}",
        id, profile.fixed_expenses
    );
    Ok(())
}
