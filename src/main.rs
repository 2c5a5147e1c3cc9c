// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::backend::{HttpBackend, SqliteBackend};
use tallybook::store::ItemStore;
use tallybook::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = match matches.get_one::<String>("server") {
        Some(url) => ItemStore::new(Box::new(HttpBackend::new(url)?)),
        None => ItemStore::new(Box::new(SqliteBackend::new(db::open_or_init()?))),
    };

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("add", sub)) => commands::items::add(&store, sub)?,
        Some(("list", sub)) => commands::items::list(&store, sub)?,
        Some(("edit", sub)) => commands::items::edit(&store, sub)?,
        Some(("rm", sub)) => commands::items::rm(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&db::open_or_init()?)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
