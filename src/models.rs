// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::date;
use crate::error::{LedgerError, Result};

/// A ledger entry. The id is assigned by the backend on creation and never
/// changes afterwards; `created_at` keeps full precision in storage and is
/// normalized to day granularity on the way out of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub category: Category,
    pub created_at: String,
}

/// Validated fields for an item write. Construction is the validation
/// boundary: a draft that exists passed the checks, so nothing invalid can
/// reach a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub category: Category,
    pub created_at: String,
}

impl ItemDraft {
    pub fn new(
        name: &str,
        value: Decimal,
        category: Category,
        created_at: &str,
    ) -> Result<ItemDraft> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation("item name must not be empty".into()));
        }
        date::parse_timestamp(created_at)?;
        Ok(ItemDraft {
            name: name.to_string(),
            value,
            category,
            created_at: created_at.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub month: String, // YYYY-MM
    pub amount: Decimal,
}

/// Derived, never persisted: recomputed from the current item set on every
/// query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String, // YYYY-MM
    pub total: Decimal,
    pub by_category: Vec<CategoryTotal>,
}
