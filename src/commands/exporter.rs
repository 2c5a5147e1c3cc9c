// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::ItemStore;

pub fn handle(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let items = store.list()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "name", "value", "type", "created_at"])?;
            for item in &items {
                wtr.write_record([
                    item.id.to_string(),
                    item.name.clone(),
                    item.value.to_string(),
                    item.category.to_string(),
                    item.created_at.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} items to {}", items.len(), out);
    Ok(())
}
