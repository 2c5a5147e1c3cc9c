// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The item store: validates, forwards to the backend, and normalizes
//! `created_at` to day granularity on everything it hands upward. The store
//! keeps no cache; every `list` reflects collaborator state at call time.

use rust_decimal::Decimal;

use crate::backend::ItemBackend;
use crate::category::Category;
use crate::date;
use crate::error::Result;
use crate::models::{CategoryTotal, DailySummary, Item, ItemDraft, MonthlySummary};
use crate::summary;

pub struct ItemStore {
    backend: Box<dyn ItemBackend>,
}

impl ItemStore {
    pub fn new(backend: Box<dyn ItemBackend>) -> Self {
        ItemStore { backend }
    }

    /// Items in backend order, dates normalized. Ordering beyond "stable
    /// for a given backend state" is a display concern.
    pub fn list(&self) -> Result<Vec<Item>> {
        let mut items = self.backend.list()?;
        for item in &mut items {
            item.created_at = date::date_only(&item.created_at);
        }
        Ok(items)
    }

    /// Validate, then let the backend assign the id. Validation failures
    /// never reach the backend, so no partially-written invalid record can
    /// exist.
    pub fn add(
        &self,
        name: &str,
        value: Decimal,
        category: Category,
        created_at: &str,
    ) -> Result<Item> {
        let draft = ItemDraft::new(name, value, category, created_at)?;
        let mut item = self.backend.add(&draft)?;
        item.created_at = date::date_only(&item.created_at);
        Ok(item)
    }

    /// Full replacement: every field overwrites the stored record. There is
    /// no partial-patch mode.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        value: Decimal,
        category: Category,
        created_at: &str,
    ) -> Result<Item> {
        let draft = ItemDraft::new(name, value, category, created_at)?;
        self.backend.update(id, &draft)?;
        Ok(Item {
            id,
            name: draft.name,
            value: draft.value,
            category: draft.category,
            created_at: date::date_only(&draft.created_at),
        })
    }

    /// Deleting an id that is not live fails with `NotFound`, including the
    /// second delete of the same id.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.backend.delete(id)
    }

    pub fn daily_summaries(&self) -> Result<Vec<DailySummary>> {
        Ok(summary::daily(&self.list()?))
    }

    pub fn monthly_summaries(&self) -> Result<Vec<MonthlySummary>> {
        Ok(summary::monthly(&self.list()?))
    }

    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>> {
        Ok(summary::by_category(&self.list()?))
    }

    pub fn monthly_budget(&self, month: &str) -> Result<Option<Decimal>> {
        date::parse_month(month)?;
        self.backend.monthly_budget(month)
    }

    pub fn set_monthly_budget(&self, month: &str, amount: Decimal) -> Result<()> {
        date::parse_month(month)?;
        self.backend.set_monthly_budget(month, amount)
    }
}
