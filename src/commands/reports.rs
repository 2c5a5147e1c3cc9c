// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::date;
use crate::store::ItemStore;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &ItemStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("daily", sub)) => daily(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn daily(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.daily_summaries()?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|s| vec![s.date.clone(), fmt_money(&s.total)])
            .collect();
        println!("{}", pretty_table(&["Date", "Total"], rows));
    }
    Ok(())
}

fn monthly(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let breakdown = sub.get_flag("breakdown");
    let data = store.monthly_summaries()?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if breakdown {
        let mut rows = Vec::new();
        for s in &data {
            for ct in &s.by_category {
                rows.push(vec![
                    s.month.clone(),
                    ct.category.to_string(),
                    fmt_money(&ct.total),
                ]);
            }
            rows.push(vec![s.month.clone(), "(total)".into(), fmt_money(&s.total)]);
        }
        println!("{}", pretty_table(&["Month", "Category", "Total"], rows));
    } else {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|s| vec![s.month.clone(), fmt_money(&s.total)])
            .collect();
        println!("{}", pretty_table(&["Month", "Total"], rows));
    }
    Ok(())
}

fn by_category(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = if let Some(month) = sub.get_one::<String>("month") {
        let mut items = store.list()?;
        items.retain(|i| date::month_key(&i.created_at) == *month);
        summary::by_category(&items)
    } else {
        store.category_totals()?
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|ct| vec![ct.category.to_string(), fmt_money(&ct.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}
