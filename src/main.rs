// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketclip::engine::ProfileEngine;
use pocketclip::store::SqliteStore;
use pocketclip::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let store = SqliteStore::new(conn);
    let user_key = std::env::var("POCKETCLIP_USER").unwrap_or_else(|_| "default".to_string());
    let mut engine = ProfileEngine::load(store, user_key)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Profile store initialized at {}", db::db_path()?.display());
        }
        Some(("setup", sub)) => commands::setup::handle(&mut engine, sub)?,
        Some(("overview", sub)) => commands::overview::handle(&mut engine, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut engine, sub)?,
        Some(("bill", sub)) => commands::bills::handle(&mut engine, sub)?,
        Some(("sub", sub)) => commands::subscriptions::handle(&mut engine, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut engine, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut engine, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut engine, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut engine, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut engine, sub)?,
        Some(("reset", sub)) => {
            if sub.get_flag("yes") {
                engine.reset_profile()?;
                println!("Profile reset. Run 'pocketclip setup' to start over.");
            } else {
                println!("This deletes all profile data. Re-run with --yes to confirm.");
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
