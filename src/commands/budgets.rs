// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{BudgetPatch, NewBudget, NewSpendingEntry, SpendingEntryPatch};
use crate::store::ProfileStore;
use crate::utils::{as_of_date, maybe_print_json, opt_date, opt_decimal, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(engine, sub)?,
        Some(("list", sub)) => list(engine, sub)?,
        Some(("update", sub)) => update(engine, sub)?,
        Some(("delete", sub)) => delete(engine, sub)?,
        Some(("entry", sub)) => match sub.subcommand() {
            Some(("add", sub)) => entry_add(engine, sub)?,
            Some(("update", sub)) => entry_update(engine, sub)?,
            Some(("delete", sub)) => entry_delete(engine, sub)?,
            Some(("list", sub)) => entry_list(engine, sub)?,
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

fn add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let monthly_limit = parse_decimal(sub.get_one::<String>("limit").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    engine.add_budget(NewBudget {
        name: name.clone(),
        category,
        monthly_limit,
    })?;
    println!("Added budget '{}' with limit {}", name, monthly_limit);
    Ok(())
}

fn list<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budgets = &engine.profile().budget_limits;
    if maybe_print_json(json_flag, jsonl_flag, budgets)? {
        return Ok(());
    }
    let rows = budgets
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.name.clone(),
                b.category.clone(),
                format!("{:.2}", b.spent),
                format!("{:.2}", b.monthly_limit),
                format!("{:.2}", b.monthly_limit - b.spent),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Category", "Spent", "Limit", "Left"], rows)
    );
    Ok(())
}

fn update<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = BudgetPatch {
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        monthly_limit: opt_decimal(sub, "limit")?,
    };
    engine.update_budget(id, patch)?;
    println!("Updated budget {}", id);
    Ok(())
}

fn delete<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    engine.delete_budget(id)?;
    println!("Deleted budget {} and its entries", id);
    Ok(())
}

fn entry_add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let budget_id = sub.get_one::<String>("budget-id").unwrap().to_string();
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = as_of_date(sub)?;
    engine.add_spending_entry(NewSpendingEntry {
        budget_id,
        name: name.clone(),
        amount,
        date,
    })?;
    println!("Recorded {} for '{}'", amount, name);
    Ok(())
}

fn entry_update<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = SpendingEntryPatch {
        budget_id: sub.get_one::<String>("budget-id").map(|s| s.to_string()),
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        amount: opt_decimal(sub, "amount")?,
        date: opt_date(sub, "date")?,
    };
    engine.update_spending_entry(id, patch)?;
    println!("Updated entry {}", id);
    Ok(())
}

fn entry_delete<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    engine.delete_spending_entry(id)?;
    println!("Deleted entry {}", id);
    Ok(())
}

fn entry_list<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budget_filter = sub.get_one::<String>("budget-id");
    let entries: Vec<_> = engine
        .profile()
        .spending_entries
        .iter()
        .filter(|e| budget_filter.map_or(true, |id| &e.budget_id == id))
        .collect();
    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.budget_id.clone(),
                e.name.clone(),
                format!("{:.2}", e.amount),
                e.date.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Budget", "Name", "Amount", "Date"], rows)
    );
    Ok(())
}
