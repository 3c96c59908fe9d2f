// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::store::ProfileStore;
use crate::utils::{in_month, parse_month};
use anyhow::Result;
use serde_json::json;

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(engine, sub),
        _ => Ok(()),
    }
}

fn export_expenses<S: ProfileStore>(
    engine: &mut ProfileEngine<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
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

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "name", "category", "amount"])?;
            for e in &entries {
                wtr.write_record([
                    e.date.to_string(),
                    e.name.clone(),
                    format!("{:?}", e.category).to_lowercase(),
                    e.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = entries
                .iter()
                .map(|e| {
                    json!({
                        "date": e.date, "name": e.name, "category": e.category, "amount": e.amount
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} expenses to {}", entries.len(), out);
    Ok(())
}
