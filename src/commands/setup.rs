// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::ProfileEngine;
use crate::models::{Currency, FinancialVibe, ProfilePatch};
use crate::store::ProfileStore;
use crate::utils::parse_decimal;
use anyhow::{Context, Result};

pub fn handle<S: ProfileStore>(engine: &mut ProfileEngine<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let income = parse_decimal(sub.get_one::<String>("income").unwrap())?;
    let pct: u32 = sub
        .get_one::<String>("savings-target")
        .unwrap()
        .parse()
        .context("Invalid savings target, expected a whole percentage")?;
    let vibe: FinancialVibe = sub
        .get_one::<String>("vibe")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let currency: Currency = sub
        .get_one::<String>("currency")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;

    engine.set_profile(ProfilePatch {
        name: Some(name.clone()),
        monthly_income: Some(income),
        savings_target_percentage: Some(pct),
        financial_vibe: Some(vibe),
        currency: Some(currency),
        onboarding_complete: Some(true),
        ..Default::default()
    })?;
    println!(
        "Profile ready for {} ({} {}/month, saving {}%)",
        name,
        currency.code(),
        income,
        pct
    );
    println!("Add fixed expenses with 'pocketclip settings fixed-add'.");
    Ok(())
}
