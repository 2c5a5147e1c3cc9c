// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::category::Category;
use crate::date;
use crate::models::Item;
use crate::store::ItemStore;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn add(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
    let category = Category::parse(sub.get_one::<String>("category").unwrap())?;
    let created_at = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(date::now);

    let item = store.add(name, value, category, &created_at)?;
    println!(
        "Recorded #{}: {} '{}' ({}) on {}",
        item.id, item.value, item.name, item.category, item.created_at
    );
    Ok(())
}

pub fn list(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_items(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|i| {
                vec![
                    i.id.to_string(),
                    i.created_at.clone(),
                    i.name.clone(),
                    fmt_money(&i.value),
                    i.category.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Name", "Value", "Category"], rows)
        );
    }
    Ok(())
}

/// Backend order, with display-side filters. Filtering is a view concern:
/// the store contract itself takes no query parameters.
pub fn query_items(store: &ItemStore, sub: &clap::ArgMatches) -> Result<Vec<Item>> {
    let mut items = store.list()?;
    if let Some(month) = sub.get_one::<String>("month") {
        items.retain(|i| date::month_key(&i.created_at) == *month);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        let cat = Category::parse(cat)?;
        items.retain(|i| i.category == cat);
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        items.truncate(*limit);
    }
    Ok(items)
}

pub fn edit(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
    let category = Category::parse(sub.get_one::<String>("category").unwrap())?;
    let created_at = sub.get_one::<String>("date").unwrap();

    let item = store.update(id, name, value, category, created_at)?;
    println!(
        "Updated #{}: {} '{}' ({}) on {}",
        item.id, item.value, item.name, item.category, item.created_at
    );
    Ok(())
}

pub fn rm(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.delete(id)?;
    println!("Deleted #{}", id);
    Ok(())
}
