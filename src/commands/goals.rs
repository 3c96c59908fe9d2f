// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{GoalPatch, NewGoal};
use crate::store::ProfileStore;
use crate::utils::{maybe_print_json, opt_date, opt_decimal, parse_date, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(engine, sub)?,
        Some(("list", sub)) => list(engine, sub)?,
        Some(("update", sub)) => update(engine, sub)?,
        Some(("delete", sub)) => delete(engine, sub)?,
        Some(("extra", sub)) => extra(engine, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let target_amount = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let current_amount = parse_decimal(sub.get_one::<String>("current").unwrap())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();

    engine.add_goal(NewGoal {
        name: name.clone(),
        target_amount,
        current_amount,
        deadline,
        category,
    })?;
    println!("Added goal '{}' targeting {} by {}", name, target_amount, deadline);
    Ok(())
}

fn list<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = &engine.profile().goals;
    if maybe_print_json(json_flag, jsonl_flag, goals)? {
        return Ok(());
    }
    let rows = goals
        .iter()
        .map(|g| {
            vec![
                g.id.clone(),
                g.name.clone(),
                format!("{:.2}", g.current_amount),
                format!("{:.2}", g.target_amount),
                g.deadline.to_string(),
                g.category.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Current", "Target", "Deadline", "Category"], rows)
    );
    Ok(())
}

fn update<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = GoalPatch {
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        target_amount: opt_decimal(sub, "target")?,
        current_amount: opt_decimal(sub, "current")?,
        deadline: opt_date(sub, "deadline")?,
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
    };
    engine.update_goal(id, patch)?;
    println!("Updated goal {}", id);
    Ok(())
}

fn delete<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    engine.delete_goal(id)?;
    println!("Deleted goal {}", id);
    Ok(())
}

fn extra<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let profile = engine.add_extra_to_goal(&id, amount)?;
    if let Some(g) = profile.goals.iter().find(|g| g.id == id) {
        println!(
            "Goal '{}' now at {} of {}",
            g.name, g.current_amount, g.target_amount
        );
    }
    Ok(())
}
