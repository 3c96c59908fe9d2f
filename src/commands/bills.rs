// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{BillPatch, NewBill};
use crate::store::ProfileStore;
use crate::utils::{as_of_date, maybe_print_json, opt_decimal, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(engine, sub)?,
        Some(("list", sub)) => list(engine, sub)?,
        Some(("update", sub)) => update(engine, sub)?,
        Some(("delete", sub)) => delete(engine, sub)?,
        Some(("pay", sub)) => pay(engine, sub)?,
        Some(("due", sub)) => due(engine, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_day(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .ok()
        .filter(|d| (1..=31).contains(d))
        .with_context(|| format!("Invalid due day '{}', expected 1-31", s))
}

fn add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let due_date = parse_day(sub.get_one::<String>("due-day").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let is_recurring = !sub.get_flag("one-off");
    let reminder_days: u32 = sub
        .get_one::<String>("reminder-days")
        .unwrap()
        .parse()
        .context("Invalid reminder days")?;

    engine.add_bill(NewBill {
        name: name.clone(),
        amount,
        category,
        due_date,
        is_recurring,
        reminder_days,
    })?;
    println!("Added bill '{}' ({} due day {})", name, amount, due_date);
    Ok(())
}

fn list<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let bills = &engine.profile().bills;
    if maybe_print_json(json_flag, jsonl_flag, bills)? {
        return Ok(());
    }
    let rows = bills
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.name.clone(),
                format!("{:.2}", b.amount),
                b.due_date.to_string(),
                if b.is_paid { "paid".into() } else { "unpaid".into() },
                b.last_paid_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Amount", "Due day", "Status", "Last paid"], rows)
    );
    Ok(())
}

fn update<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let due_date = match sub.get_one::<String>("due-day") {
        Some(s) => Some(parse_day(s)?),
        None => None,
    };
    let reminder_days = match sub.get_one::<String>("reminder-days") {
        Some(s) => Some(s.parse::<u32>().context("Invalid reminder days")?),
        None => None,
    };
    let patch = BillPatch {
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        amount: opt_decimal(sub, "amount")?,
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        due_date,
        is_recurring: None,
        reminder_days,
        is_paid: if sub.get_flag("unpaid") { Some(false) } else { None },
    };
    engine.update_bill(id, patch)?;
    println!("Updated bill {}", id);
    Ok(())
}

fn delete<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    engine.delete_bill(id)?;
    println!("Deleted bill {}", id);
    Ok(())
}

fn pay<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().to_string();
    let today = as_of_date(sub)?;
    let profile = engine.mark_bill_paid(&id, today)?;
    match profile.bills.iter().find(|b| b.id == id) {
        Some(b) => println!("Marked '{}' paid on {}", b.name, today),
        None => println!("No bill with id {}", id),
    }
    Ok(())
}

fn due<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = as_of_date(sub)?;
    let upcoming = engine.upcoming_bills(today);
    if maybe_print_json(json_flag, jsonl_flag, &upcoming)? {
        return Ok(());
    }
    if upcoming.is_empty() {
        println!("Nothing due within reminder windows.");
        return Ok(());
    }
    let rows = upcoming
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.name.clone(),
                format!("{:.2}", b.amount),
                b.due_date.to_string(),
                format!("{}d", b.reminder_days),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Amount", "Due day", "Reminder"], rows)
    );
    Ok(())
}
