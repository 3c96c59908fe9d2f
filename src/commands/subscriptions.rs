// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{BillingCycle, NewSubscription, SubscriptionPatch};
use crate::store::ProfileStore;
use crate::utils::{as_of_date, maybe_print_json, opt_date, opt_decimal, parse_date, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(engine, sub)?,
        Some(("list", sub)) => list(engine, sub)?,
        Some(("update", sub)) => update(engine, sub)?,
        Some(("delete", sub)) => delete(engine, sub)?,
        Some(("forgotten", sub)) => forgotten(engine, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let billing_cycle: BillingCycle = sub
        .get_one::<String>("cycle")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let next_billing_date = parse_date(sub.get_one::<String>("next-billing").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let last_used = opt_date(sub, "last-used")?;

    engine.add_subscription(NewSubscription {
        name: name.clone(),
        amount,
        category,
        billing_cycle,
        next_billing_date,
        last_used,
    })?;
    println!("Added subscription '{}' ({} per cycle)", name, amount);
    Ok(())
}

fn list<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let subs = &engine.profile().subscriptions;
    if maybe_print_json(json_flag, jsonl_flag, subs)? {
        return Ok(());
    }
    let rows = subs
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.name.clone(),
                format!("{:.2}", s.amount),
                format!("{:?}", s.billing_cycle).to_lowercase(),
                s.next_billing_date.to_string(),
                s.last_used.map(|d| d.to_string()).unwrap_or_else(|| "never".into()),
                if s.is_active { "active".into() } else { "inactive".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Name", "Amount", "Cycle", "Next billing", "Last used", "Status"],
            rows
        )
    );
    Ok(())
}

fn update<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let billing_cycle = match sub.get_one::<String>("cycle") {
        Some(s) => Some(s.parse::<BillingCycle>().map_err(anyhow::Error::msg)?),
        None => None,
    };
    let patch = SubscriptionPatch {
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        amount: opt_decimal(sub, "amount")?,
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        billing_cycle,
        next_billing_date: opt_date(sub, "next-billing")?,
        last_used: opt_date(sub, "last-used")?,
        is_active: if sub.get_flag("cancel") { Some(false) } else { None },
    };
    engine.update_subscription(id, patch)?;
    println!("Updated subscription {}", id);
    Ok(())
}

fn delete<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    engine.delete_subscription(id)?;
    println!("Deleted subscription {}", id);
    Ok(())
}

fn forgotten<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = as_of_date(sub)?;
    let forgotten = engine.forgotten_subscriptions(today);
    if maybe_print_json(json_flag, jsonl_flag, &forgotten)? {
        return Ok(());
    }
    if forgotten.is_empty() {
        println!("No forgotten subscriptions.");
        return Ok(());
    }
    let rows = forgotten
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.name.clone(),
                format!("{:.2}", s.amount),
                s.last_used.map(|d| d.to_string()).unwrap_or_else(|| "never".into()),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Name", "Amount", "Last used"], rows));
    Ok(())
}
