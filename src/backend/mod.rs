// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{Item, ItemDraft};

pub mod http;
pub mod sqlite;

pub use http::HttpBackend;
pub use sqlite::SqliteBackend;

/// The durable collaborator the ledger delegates storage to. Both shipped
/// bindings (HTTP REST and local SQLite) satisfy this contract; nothing
/// above it may branch on which one is in play.
///
/// Ids are allocated here, never by the caller. `update` returns unit so a
/// binding that reports nothing about the written record remains a valid
/// implementation.
pub trait ItemBackend {
    fn list(&self) -> Result<Vec<Item>>;
    fn add(&self, draft: &ItemDraft) -> Result<Item>;
    fn update(&self, id: i64, draft: &ItemDraft) -> Result<()>;
    fn delete(&self, id: i64) -> Result<()>;
    fn monthly_budget(&self, month: &str) -> Result<Option<Decimal>>;
    fn set_monthly_budget(&self, month: &str, amount: Decimal) -> Result<()>;
}
