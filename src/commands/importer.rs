// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::category::Category;
use crate::models::ItemDraft;
use crate::store::ItemStore;

/// Wire form of an import record. The category arrives as its raw `type`
/// code so closure is checked here; an exported id is an unknown field and
/// is dropped, since the backend assigns fresh ones.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    name: String,
    value: Decimal,
    #[serde(rename = "type")]
    category: String,
    created_at: String,
}

pub fn handle(store: &ItemStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Read import file {}", path))?;
    let records: Vec<ImportRecord> =
        serde_json::from_str(&content).with_context(|| format!("Parse JSON from {}", path))?;

    // Validate every record before forwarding any, so a bad row cannot
    // leave a partial import behind.
    let mut drafts = Vec::with_capacity(records.len());
    for (idx, rec) in records.iter().enumerate() {
        let category = Category::parse(&rec.category)
            .with_context(|| format!("Record {} in {}", idx + 1, path))?;
        let draft = ItemDraft::new(&rec.name, rec.value, category, &rec.created_at)
            .with_context(|| format!("Record {} in {}", idx + 1, path))?;
        drafts.push(draft);
    }

    let mut count = 0usize;
    for draft in &drafts {
        store.add(&draft.name, draft.value, draft.category, &draft.created_at)?;
        count += 1;
    }
    println!("Imported {} items from {}", count, path);
    Ok(())
}
