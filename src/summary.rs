// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation over the current item set. Grouping keys are the normalized
//! day (or its month prefix) compared exactly; sums accumulate in
//! `Decimal`, never floating point. Output is ascending by key, which for
//! ISO-shaped keys is chronological.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::category::Category;
use crate::date;
use crate::models::{CategoryTotal, DailySummary, Item, MonthlySummary};

pub fn daily(items: &[Item]) -> Vec<DailySummary> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for item in items {
        let day = date::date_only(&item.created_at);
        *totals.entry(day).or_insert(Decimal::ZERO) += item.value;
    }
    totals
        .into_iter()
        .map(|(date, total)| DailySummary { date, total })
        .collect()
}

pub fn monthly(items: &[Item]) -> Vec<MonthlySummary> {
    let mut totals: BTreeMap<String, (Decimal, BTreeMap<Category, Decimal>)> = BTreeMap::new();
    for item in items {
        let month = date::month_key(&date::date_only(&item.created_at));
        let entry = totals
            .entry(month)
            .or_insert_with(|| (Decimal::ZERO, BTreeMap::new()));
        entry.0 += item.value;
        *entry.1.entry(item.category).or_insert(Decimal::ZERO) += item.value;
    }
    totals
        .into_iter()
        .map(|(month, (total, cats))| MonthlySummary {
            month,
            total,
            by_category: collect_totals(cats),
        })
        .collect()
}

pub fn by_category(items: &[Item]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
    for item in items {
        *totals.entry(item.category).or_insert(Decimal::ZERO) += item.value;
    }
    collect_totals(totals)
}

fn collect_totals(totals: BTreeMap<Category, Decimal>) -> Vec<CategoryTotal> {
    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect()
}
