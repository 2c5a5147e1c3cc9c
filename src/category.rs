// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// The closed set of ledger categories. Every stored item carries one of
/// these; growing the set is a release, not a data migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Drink,
    Shopping,
    Entertainment,
    Study,
    Transport,
    Service,
    Clothes,
    Housing,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Drink,
        Category::Shopping,
        Category::Entertainment,
        Category::Study,
        Category::Transport,
        Category::Service,
        Category::Clothes,
        Category::Housing,
        Category::Other,
    ];

    /// Canonical code, which is also the wire value (the historical `type`
    /// field on items).
    pub fn code(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drink => "Drink",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Study => "Study",
            Category::Transport => "Transport",
            Category::Service => "Service",
            Category::Clothes => "Clothes",
            Category::Housing => "Housing",
            Category::Other => "Other",
        }
    }

    /// Exact-match lookup against the closed set. No case folding, no
    /// coercion to a default; anything else is rejected at the boundary.
    pub fn parse(raw: &str) -> Result<Category, LedgerError> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.code() == raw)
            .ok_or_else(|| LedgerError::InvalidCategory(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        Category::parse(raw).is_ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}
