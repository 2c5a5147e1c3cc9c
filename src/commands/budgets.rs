// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::store::ItemStore;
use crate::utils::{fmt_money, parse_decimal, pretty_table};

pub fn handle(store: &ItemStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("report", sub)) => report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    store.set_monthly_budget(month, amount)?;
    println!("Budget set for {} = {}", month, amount);
    Ok(())
}

fn show(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    match store.monthly_budget(month)? {
        Some(amount) => println!("{}: {}", month, fmt_money(&amount)),
        None => println!("No budget set for {}", month),
    }
    Ok(())
}

fn report(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    let budget = store.monthly_budget(month)?.unwrap_or(Decimal::ZERO);
    let spent = store
        .monthly_summaries()?
        .into_iter()
        .find(|s| s.month == *month)
        .map(|s| s.total)
        .unwrap_or(Decimal::ZERO);
    let remaining = budget - spent;
    println!(
        "{}",
        pretty_table(
            &["Month", "Budget", "Spent", "Remaining"],
            vec![vec![
                month.clone(),
                fmt_money(&budget),
                fmt_money(&spent),
                fmt_money(&remaining),
            ]],
        )
    );
    Ok(())
}
