// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::category::Category;
use crate::date;
use crate::utils::pretty_table;

/// Scan the local database for rows that break the ledger invariants:
/// category closure, decodable amounts, day-normalizable dates. Reads raw
/// rows on purpose; the backend refuses to decode exactly the rows this
/// needs to report.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt = conn.prepare("SELECT id, name, value, type, created_at FROM items")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let value: String = r.get(2)?;
        let category: String = r.get(3)?;
        let created_at: String = r.get(4)?;

        if name.trim().is_empty() {
            rows.push(vec!["empty_name".into(), format!("item {}", id)]);
        }
        if value.parse::<Decimal>().is_err() {
            rows.push(vec!["bad_amount".into(), format!("item {}: '{}'", id, value)]);
        }
        if !Category::is_valid(&category) {
            rows.push(vec![
                "unknown_category".into(),
                format!("item {}: '{}'", id, category),
            ]);
        }
        let day = date::date_only(&created_at);
        if NaiveDate::parse_from_str(&day, "%Y-%m-%d").is_err() {
            rows.push(vec![
                "bad_date".into(),
                format!("item {}: '{}'", id, created_at),
            ]);
        }
    }

    let mut bstmt = conn.prepare("SELECT month, budget_amount FROM monthly_budgets")?;
    let mut bcur = bstmt.query([])?;
    while let Some(r) = bcur.next()? {
        let month: String = r.get(0)?;
        let amount: String = r.get(1)?;
        if date::parse_month(&month).is_err() {
            rows.push(vec!["bad_month".into(), format!("budget '{}'", month)]);
        }
        if amount.parse::<Decimal>().is_err() {
            rows.push(vec![
                "bad_budget_amount".into(),
                format!("budget {}: '{}'", month, amount),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
