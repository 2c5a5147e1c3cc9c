// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use super::ItemBackend;
use crate::category::Category;
use crate::error::{LedgerError, Result};
use crate::models::{Item, ItemDraft};

/// Local binding over the historical schema: `items(id, name, value, type,
/// created_at)` plus `monthly_budgets(month UNIQUE, budget_amount)`.
/// Amounts are TEXT in storage and decimal in memory.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn new(conn: Connection) -> Self {
        SqliteBackend { conn }
    }
}

fn decode_value(raw: &str, id: i64) -> Result<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|_| LedgerError::Transport(format!("invalid stored value '{}' for item {}", raw, id)))
}

fn decode_category(raw: &str, id: i64) -> Result<Category> {
    Category::parse(raw)
        .map_err(|_| LedgerError::Transport(format!("unknown stored category '{}' for item {}", raw, id)))
}

impl ItemBackend for SqliteBackend {
    fn list(&self) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, value, type, created_at FROM items ORDER BY created_at DESC, id DESC",
        )?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let name: String = r.get(1)?;
            let value: String = r.get(2)?;
            let category: String = r.get(3)?;
            let created_at: String = r.get(4)?;
            items.push(Item {
                id,
                name,
                value: decode_value(&value, id)?,
                category: decode_category(&category, id)?,
                created_at,
            });
        }
        Ok(items)
    }

    fn add(&self, draft: &ItemDraft) -> Result<Item> {
        self.conn.execute(
            "INSERT INTO items(name, value, type, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.name,
                draft.value.to_string(),
                draft.category.code(),
                draft.created_at
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Item {
            id,
            name: draft.name.clone(),
            value: draft.value,
            category: draft.category,
            created_at: draft.created_at.clone(),
        })
    }

    fn update(&self, id: i64, draft: &ItemDraft) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE items SET name = ?1, value = ?2, type = ?3, created_at = ?4 WHERE id = ?5",
            params![
                draft.name,
                draft.value.to_string(),
                draft.category.code(),
                draft.created_at,
                id
            ],
        )?;
        if affected == 0 {
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }

    fn monthly_budget(&self, month: &str) -> Result<Option<Decimal>> {
        let amount: Option<String> = self
            .conn
            .query_row(
                "SELECT budget_amount FROM monthly_budgets WHERE month = ?1",
                params![month],
                |r| r.get(0),
            )
            .optional()?;
        match amount {
            Some(raw) => raw
                .parse::<Decimal>()
                .map(Some)
                .map_err(|_| {
                    LedgerError::Transport(format!("invalid stored budget '{}' for {}", raw, month))
                }),
            None => Ok(None),
        }
    }

    fn set_monthly_budget(&self, month: &str, amount: Decimal) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO monthly_budgets(month, budget_amount) VALUES (?1, ?2)",
            params![month, amount.to_string()],
        )?;
        Ok(())
    }
}
